use payloads::GroupDetails;
use yew::prelude::*;

use super::InviteLink;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub details: GroupDetails,
    /// Current avatar; may differ from `details.avatar_url` after an upload.
    pub avatar_url: AttrValue,
    pub on_edit_avatar: Callback<()>,
}

#[function_component]
pub fn GroupDetailsCard(props: &Props) -> Html {
    let details = &props.details;

    html! {
        <div class="bg-white p-6 rounded-xl shadow-md flex flex-col lg:flex-row
                    items-start lg:items-center justify-between gap-6">
            <div class="flex items-center gap-4 flex-1">
                <div class="relative w-16 h-16">
                    <img
                        src={props.avatar_url.clone()}
                        alt="group avatar"
                        class="rounded-full w-full h-full object-cover border border-gray-300"
                    />
                    <button
                        type="button"
                        title="Edit photo"
                        onclick={props.on_edit_avatar.reform(|_| ())}
                        class="absolute top-0 right-0 bg-white p-1 rounded-full shadow
                               text-blue-600 hover:bg-blue-50 transition text-xs"
                    >
                        {"✎"}
                    </button>
                </div>

                <div>
                    <h2 class="text-lg font-bold">{&details.name}</h2>
                    <p class="text-sm text-gray-600 max-w-md">
                        {&details.description}
                    </p>
                    <div class="flex flex-wrap gap-4 text-sm mt-3 text-gray-600">
                        <span>{format!("{} Members", details.member_count)}</span>
                        <span>{format!("Created: {}", details.created)}</span>
                        <span>{format!("{} Memories", details.memory_count)}</span>
                    </div>
                </div>
            </div>

            <InviteLink link={details.invite_link.clone()} />
        </div>
    }
}
