use std::future::Future;

use web_sys::File;
use yew::prelude::*;

use crate::components::{
    AvatarPreviewModal, AvatarUploadModal, GroupDetailsCard, MemberSearch,
    MemberTable, PageSelector,
};
use crate::hooks::{use_group_details, use_group_members, use_title};
use crate::state::{GroupScreenAction, GroupScreenState};
use crate::utils::read_file_as_data_url;

/// Wait for an uploaded photo to finish reading, then swap it in and
/// preview it, in that order. A failed read changes nothing.
pub async fn apply_uploaded_avatar<R>(
    read: R,
    on_changed: Callback<String>,
    on_preview: Callback<AttrValue>,
) where
    R: Future<Output = Result<String, String>>,
{
    match read.await {
        Ok(url) => {
            on_changed.emit(url.clone());
            on_preview.emit(AttrValue::from(url));
        }
        Err(e) => {
            tracing::warn!("Could not read avatar file: {e}");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub slug: AttrValue,
}

/// Group details, invite link and member management for one group.
#[function_component]
pub fn GroupSettingsPage(props: &Props) -> Html {
    let details_hook = use_group_details(props.slug.clone());
    let members_hook = use_group_members(props.slug.clone());
    let state = use_reducer(GroupScreenState::default);
    let show_upload = use_state(|| false);
    let preview_url = use_state(|| None::<AttrValue>);

    use_title(details_hook.data.found().map(|details| details.name.clone()));

    // Show the group's stored avatar once the directory answers
    {
        let state = state.clone();
        let stored_avatar = details_hook
            .data
            .found()
            .map(|details| details.avatar_url.clone());

        use_effect_with(stored_avatar, move |stored_avatar| {
            if let Some(url) = stored_avatar {
                state.dispatch(GroupScreenAction::AvatarLoaded(url.clone()));
            }
        });
    }

    let on_edit_avatar = {
        let show_upload = show_upload.clone();
        Callback::from(move |_: ()| show_upload.set(true))
    };

    let on_upload_close = {
        let show_upload = show_upload.clone();
        Callback::from(move |_: ()| show_upload.set(false))
    };

    let on_upload = {
        let state = state.clone();
        let show_upload = show_upload.clone();
        let preview_url = preview_url.clone();

        Callback::from(move |file: File| {
            show_upload.set(false);

            let on_changed = {
                let state = state.clone();
                let name = file.name();
                let size = file.size();
                Callback::from(move |url: String| {
                    tracing::info!(file = %name, size, "Group avatar replaced");
                    state.dispatch(GroupScreenAction::AvatarChanged(url));
                })
            };
            let on_preview = {
                let preview_url = preview_url.clone();
                Callback::from(move |url: AttrValue| preview_url.set(Some(url)))
            };

            yew::platform::spawn_local(async move {
                apply_uploaded_avatar(
                    read_file_as_data_url(&file),
                    on_changed,
                    on_preview,
                )
                .await;
            });
        })
    };

    let on_preview_close = {
        let preview_url = preview_url.clone();
        Callback::from(move |_: ()| preview_url.set(None))
    };

    let on_search = {
        let state = state.clone();
        Callback::from(move |term: String| {
            tracing::debug!(term = %term, "Member search changed");
            state.dispatch(GroupScreenAction::SearchChanged(term));
        })
    };

    let on_page_select = {
        let state = state.clone();
        Callback::from(move |page: u32| {
            tracing::debug!(page, "Members page selected");
            state.dispatch(GroupScreenAction::PageSelected(page));
        })
    };

    html! {
        <main class="flex-1 p-6">
            <section class="mb-6">
                <h1 class="text-2xl font-bold mb-2">{"Group Details"}</h1>
                <p class="text-sm text-gray-500 mb-4">
                    {"Manage your group settings and members"}
                </p>

                {details_hook.render("group", |details, _| html! {
                    <GroupDetailsCard
                        details={details.clone()}
                        avatar_url={AttrValue::from(state.group_avatar.clone())}
                        on_edit_avatar={on_edit_avatar.clone()}
                    />
                })}
            </section>

            <section>
                <div class="bg-white p-6 rounded-xl shadow-md">
                    <div class="flex justify-between items-center mb-4">
                        <h3 class="text-lg font-semibold">{"Group Members"}</h3>
                    </div>

                    <MemberSearch
                        value={AttrValue::from(state.search_term.clone())}
                        on_change={on_search}
                    />

                    {members_hook.render("members", |members, _| {
                        let visible: Vec<_> = state
                            .visible_members(members)
                            .into_iter()
                            .cloned()
                            .collect();
                        html! { <MemberTable members={visible} /> }
                    })}

                    <PageSelector
                        current_page={state.current_page}
                        on_select={on_page_select}
                    />
                </div>
            </section>

            if *show_upload {
                <AvatarUploadModal on_upload={on_upload} on_close={on_upload_close} />
            }

            if let Some(url) = (*preview_url).clone() {
                <AvatarPreviewModal image_url={url} on_close={on_preview_close} />
            }
        </main>
    }
}
