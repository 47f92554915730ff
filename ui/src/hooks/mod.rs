pub mod use_fetch;
pub mod use_group_details;
pub mod use_group_members;
pub mod use_title;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_group_details::use_group_details;
pub use use_group_members::use_group_members;
pub use use_title::use_title;
