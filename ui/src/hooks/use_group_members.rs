use payloads::GroupMember;
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::contexts::use_directory;

/// Members of the group identified by `slug`. A group with no members comes
/// back as an empty list rather than "not found".
#[hook]
pub fn use_group_members(slug: AttrValue) -> FetchHookReturn<Vec<GroupMember>> {
    let directory = use_directory();

    use_fetch(slug, move |slug: AttrValue| {
        let directory = directory.clone();
        async move { directory.fetch_members(&slug).await.empty_as_default() }
    })
}
