pub mod clipboard;
pub mod files;

pub use clipboard::copy_to_clipboard;
pub use files::read_file_as_data_url;
