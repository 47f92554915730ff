pub mod directory;
pub mod toast;

pub use directory::{DirectoryHandle, DirectoryProvider, use_directory};
pub use toast::{Toast, ToastProvider, ToastType, use_toast};
