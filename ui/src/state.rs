use std::rc::Rc;

use payloads::{GroupMember, filter_members};
use yew::prelude::*;

/// Page buttons offered under the members table.
pub const PAGE_NUMBERS: [u32; 3] = [1, 2, 3];

/// Shown until the directory supplies the group's own avatar.
pub const PLACEHOLDER_AVATAR: &str = "https://i.pravatar.cc/60";

/// State owned by the group settings screen for as long as it is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupScreenState {
    pub current_page: u32,
    pub search_term: String,
    pub group_avatar: String,
    /// Set once the user uploads a photo; the directory's avatar no longer
    /// applies after that.
    avatar_replaced: bool,
}

impl Default for GroupScreenState {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_term: String::new(),
            group_avatar: PLACEHOLDER_AVATAR.to_string(),
            avatar_replaced: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupScreenAction {
    PageSelected(u32),
    SearchChanged(String),
    /// The directory returned the group's stored avatar.
    AvatarLoaded(String),
    /// A newly uploaded photo finished reading.
    AvatarChanged(String),
}

impl GroupScreenState {
    /// The state after `action`. Never touches `self`.
    pub fn apply(&self, action: GroupScreenAction) -> Self {
        let mut next = self.clone();

        match action {
            GroupScreenAction::PageSelected(page) => {
                // Only the fixed buttons can be selected
                if PAGE_NUMBERS.contains(&page) {
                    next.current_page = page;
                }
            }
            GroupScreenAction::SearchChanged(term) => {
                next.search_term = term;
            }
            GroupScreenAction::AvatarLoaded(url) => {
                if !next.avatar_replaced {
                    next.group_avatar = url;
                }
            }
            GroupScreenAction::AvatarChanged(url) => {
                next.group_avatar = url;
                next.avatar_replaced = true;
            }
        }

        next
    }

    /// Members to render for the current search term.
    ///
    /// Page selection is cosmetic: every match is returned regardless of
    /// `current_page`.
    pub fn visible_members<'a>(
        &self,
        members: &'a [GroupMember],
    ) -> Vec<&'a GroupMember> {
        filter_members(members, &self.search_term)
    }
}

impl Reducible for GroupScreenState {
    type Action = GroupScreenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::Role;

    fn member(name: &str, email: &str, role: Role) -> GroupMember {
        GroupMember {
            name: name.to_string(),
            email: email.to_string(),
            role,
            joined: "Jan 15, 2023".to_string(),
            memories: 1,
            avatar_url: "https://i.pravatar.cc/40".to_string(),
        }
    }

    fn members() -> Vec<GroupMember> {
        vec![
            member("Alex Morgan", "alex@example.com", Role::Admin),
            member("Sarah Johnson", "sarah@example.com", Role::Moderator),
            member("Michael Chen", "michael@example.com", Role::Member),
        ]
    }

    #[test]
    fn test_defaults() {
        let state = GroupScreenState::default();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.search_term, "");
        assert_eq!(state.group_avatar, PLACEHOLDER_AVATAR);
    }

    #[test]
    fn test_apply_is_pure() {
        let state = GroupScreenState::default();
        let next =
            state.apply(GroupScreenAction::SearchChanged("sarah".into()));
        assert_eq!(state, GroupScreenState::default());
        assert_eq!(next.search_term, "sarah");
        assert_eq!(
            next,
            state.apply(GroupScreenAction::SearchChanged("sarah".into()))
        );
    }

    #[test]
    fn test_page_selection_marks_exactly_one_page() {
        for page in PAGE_NUMBERS {
            let state = GroupScreenState::default()
                .apply(GroupScreenAction::PageSelected(page));
            let selected: Vec<u32> = PAGE_NUMBERS
                .into_iter()
                .filter(|p| state.current_page == *p)
                .collect();
            assert_eq!(selected, vec![page]);
        }
    }

    #[test]
    fn test_page_outside_buttons_is_ignored() {
        let state = GroupScreenState::default()
            .apply(GroupScreenAction::PageSelected(2))
            .apply(GroupScreenAction::PageSelected(0))
            .apply(GroupScreenAction::PageSelected(4));
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_page_selection_does_not_slice_members() {
        let members = members();
        let first = GroupScreenState::default();
        let third = first.apply(GroupScreenAction::PageSelected(3));
        assert_eq!(third.visible_members(&members).len(), 3);
        assert_eq!(
            first.visible_members(&members),
            third.visible_members(&members)
        );
    }

    #[test]
    fn test_search_scenarios() {
        let members = members();
        let search = |term: &str| {
            GroupScreenState::default()
                .apply(GroupScreenAction::SearchChanged(term.to_string()))
                .visible_members(&members)
                .into_iter()
                .map(|m| m.name.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(search("sarah"), vec!["Sarah Johnson"]);
        assert_eq!(search("example.com").len(), 3);
        assert!(search("zzz").is_empty());
        assert_eq!(search("").len(), 3);
    }

    #[test]
    fn test_clearing_search_restores_everyone() {
        let members = members();
        let state = GroupScreenState::default()
            .apply(GroupScreenAction::SearchChanged("zzz".into()))
            .apply(GroupScreenAction::SearchChanged(String::new()));
        assert_eq!(state.visible_members(&members).len(), 3);
    }

    #[test]
    fn test_loaded_avatar_replaces_placeholder() {
        let state = GroupScreenState::default().apply(
            GroupScreenAction::AvatarLoaded("https://cdn.test/g.png".into()),
        );
        assert_eq!(state.group_avatar, "https://cdn.test/g.png");
    }

    #[test]
    fn test_uploaded_avatar_wins_over_later_load() {
        let uploaded = "data:image/png;base64,iVBORw0KGgo=";
        let state = GroupScreenState::default()
            .apply(GroupScreenAction::AvatarChanged(uploaded.into()))
            .apply(GroupScreenAction::AvatarLoaded(
                "https://cdn.test/g.png".into(),
            ));
        assert_eq!(state.group_avatar, uploaded);
    }

    #[test]
    fn test_last_upload_wins() {
        let state = GroupScreenState::default()
            .apply(GroupScreenAction::AvatarChanged("data:a".into()))
            .apply(GroupScreenAction::AvatarChanged("data:b".into()));
        assert_eq!(state.group_avatar, "data:b");
    }

    #[test]
    fn test_reduce_matches_apply() {
        let state = Rc::new(GroupScreenState::default());
        let reduced = state
            .clone()
            .reduce(GroupScreenAction::PageSelected(2));
        assert_eq!(*reduced, state.apply(GroupScreenAction::PageSelected(2)));
    }
}
