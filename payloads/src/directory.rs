//! Data access for the group settings screen.
//!
//! The view never owns its data; it asks a [`GroupDirectory`] for it. The
//! [`StaticDirectory`] serves the built-in demo group, and
//! [`crate::APIClient`] serves groups from a backend.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{ClientError, GroupDetails, GroupMember, Role};

/// Result of asking a directory for something.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Found(T),
    /// The directory answered, but has nothing for this request.
    Empty,
    Failed(DirectoryError),
}

impl<T> FetchOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Found(value) => FetchOutcome::Found(f(value)),
            FetchOutcome::Empty => FetchOutcome::Empty,
            FetchOutcome::Failed(e) => FetchOutcome::Failed(e),
        }
    }

    /// Treat "nothing there" as a successful fetch of the default value.
    /// Used for lists, where an empty result renders the same as no result.
    pub fn empty_as_default(self) -> FetchOutcome<T>
    where
        T: Default,
    {
        match self {
            FetchOutcome::Empty => FetchOutcome::Found(T::default()),
            other => other,
        }
    }

    /// Lift an optional lookup result, mapping `None` to `Empty`.
    pub fn from_lookup<E>(result: Result<Option<T>, E>) -> Self
    where
        E: Into<DirectoryError>,
    {
        match result {
            Ok(Some(value)) => FetchOutcome::Found(value),
            Ok(None) => FetchOutcome::Empty,
            Err(e) => FetchOutcome::Failed(e.into()),
        }
    }
}

impl<T> FetchOutcome<Vec<T>> {
    /// A list with no entries is reported as `Empty`.
    pub fn from_list(items: Vec<T>) -> Self {
        if items.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Found(items)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The backend rejected the request; contains its response text.
    #[error("{0}")]
    Api(String),
    #[error("Network error. Please check your connection.")]
    Network,
    /// The backend is up but can't serve groups right now (HTTP 503).
    #[error("The group directory is unavailable: {0}")]
    Unavailable(String),
}

impl From<ClientError> for DirectoryError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::APIError(status, message)
                if status == StatusCode::SERVICE_UNAVAILABLE =>
            {
                DirectoryError::Unavailable(message)
            }
            ClientError::APIError(_, message) => DirectoryError::Api(message),
            ClientError::Network(_) => DirectoryError::Network,
        }
    }
}

/// Source of group metadata and membership.
///
/// Not `Send`: implementations run on the browser's event loop.
#[async_trait(?Send)]
pub trait GroupDirectory {
    async fn fetch_group(&self, slug: &str) -> FetchOutcome<GroupDetails>;

    async fn fetch_members(&self, slug: &str) -> FetchOutcome<Vec<GroupMember>>;
}

/// An in-memory directory holding a single group.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDirectory {
    details: GroupDetails,
    members: Vec<GroupMember>,
}

impl StaticDirectory {
    pub fn new(details: GroupDetails, members: Vec<GroupMember>) -> Self {
        Self { details, members }
    }

    /// The "Travel Enthusiasts" demo group.
    pub fn travel_enthusiasts() -> Self {
        let details = GroupDetails {
            slug: crate::DEFAULT_GROUP_SLUG.to_string(),
            name: "Travel Enthusiasts".to_string(),
            description: "A community of passionate travelers sharing their \
                          journey memories from around the world."
                .to_string(),
            member_count: 42,
            created: "Jan 15, 2023".to_string(),
            memory_count: 152,
            avatar_url: "https://i.pravatar.cc/60".to_string(),
            invite_link:
                "https://mapmemory.com/invite/travel-enthusiasts-9d2f8e"
                    .to_string(),
        };

        let member = |name: &str,
                      email: &str,
                      role: Role,
                      joined: &str,
                      memories: u32,
                      img: u32| GroupMember {
            name: name.to_string(),
            email: email.to_string(),
            role,
            joined: joined.to_string(),
            memories,
            avatar_url: format!("https://i.pravatar.cc/40?img={img}"),
        };

        let members = vec![
            member(
                "Alex Morgan",
                "alex@example.com",
                Role::Admin,
                "Jan 15, 2023",
                38,
                1,
            ),
            member(
                "Sarah Johnson",
                "sarah@example.com",
                Role::Moderator,
                "Feb 3, 2023",
                24,
                2,
            ),
            member(
                "Michael Chen",
                "michael@example.com",
                Role::Member,
                "Mar 12, 2023",
                17,
                3,
            ),
        ];

        Self::new(details, members)
    }

    fn serves(&self, slug: &str) -> bool {
        self.details.slug == slug
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::travel_enthusiasts()
    }
}

#[async_trait(?Send)]
impl GroupDirectory for StaticDirectory {
    async fn fetch_group(&self, slug: &str) -> FetchOutcome<GroupDetails> {
        if self.serves(slug) {
            FetchOutcome::Found(self.details.clone())
        } else {
            FetchOutcome::Empty
        }
    }

    async fn fetch_members(&self, slug: &str) -> FetchOutcome<Vec<GroupMember>> {
        if self.serves(slug) {
            FetchOutcome::from_list(self.members.clone())
        } else {
            FetchOutcome::Empty
        }
    }
}
