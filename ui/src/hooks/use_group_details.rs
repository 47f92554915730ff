use payloads::GroupDetails;
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::contexts::use_directory;

/// Metadata for the group identified by `slug`.
#[hook]
pub fn use_group_details(slug: AttrValue) -> FetchHookReturn<GroupDetails> {
    let directory = use_directory();

    use_fetch(slug, move |slug: AttrValue| {
        let directory = directory.clone();
        async move { directory.fetch_group(&slug).await }
    })
}
