pub mod api_client;
pub mod directory;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use directory::{
    DirectoryError, FetchOutcome, GroupDirectory, StaticDirectory,
};
pub use responses::{GroupDetails, GroupMember};

use serde::{Deserialize, Serialize};

/// Group shown when the URL doesn't name one.
pub const DEFAULT_GROUP_SLUG: &str = "travel-enthusiasts";

/// A member's role within a group.
///
/// Ordered from most to least privileged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    Admin,
    Moderator,
    Member,
}

impl Role {
    /// Whether edit/remove controls are offered for someone with this role.
    /// Admins can never be edited or removed from the members table.
    pub fn is_manageable(&self) -> bool {
        !matches!(self, Role::Admin)
    }
}

/// Members whose name or email contains `term`, ignoring case, in their
/// original order. An empty term matches everyone.
pub fn filter_members<'a>(
    members: &'a [GroupMember],
    term: &str,
) -> Vec<&'a GroupMember> {
    let needle = term.to_lowercase();
    members
        .iter()
        .filter(|member| member.matches_lowercase(&needle))
        .collect()
}
