use serde::{Deserialize, Serialize};

use crate::Role;

/// A single row of the group members table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Already formatted for display (e.g. "Jan 15, 2023"); never parsed.
    pub joined: String,
    pub memories: u32,
    pub avatar_url: String,
}

impl GroupMember {
    /// Case-insensitive substring match against name or email.
    pub fn matches(&self, term: &str) -> bool {
        self.matches_lowercase(&term.to_lowercase())
    }

    /// Like [`GroupMember::matches`], for a needle that is already
    /// lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

/// Group metadata shown above the members table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetails {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub member_count: u32,
    /// Display-formatted creation date.
    pub created: String,
    pub memory_count: u32,
    pub avatar_url: String,
    pub invite_link: String,
}
