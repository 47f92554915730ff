pub mod group_settings;
pub mod not_found;

pub use group_settings::GroupSettingsPage;
pub use not_found::NotFoundPage;
