pub mod avatar_preview_modal;
pub mod avatar_upload_modal;
pub mod group_details_card;
pub mod invite_link;
pub mod member_search;
pub mod member_table;
pub mod modal;
pub mod page_selector;
pub mod role_badge;
pub mod toast;

pub use avatar_preview_modal::AvatarPreviewModal;
pub use avatar_upload_modal::AvatarUploadModal;
pub use group_details_card::GroupDetailsCard;
pub use invite_link::InviteLink;
pub use member_search::MemberSearch;
pub use member_table::MemberTable;
pub use modal::Modal;
pub use page_selector::PageSelector;
pub use role_badge::RoleBadge;
pub use toast::ToastContainer;
