use yew::prelude::*;

use super::Modal;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub image_url: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn AvatarPreviewModal(props: &Props) -> Html {
    html! {
        <Modal title="Preview" on_close={props.on_close.clone()}>
            <p class="text-sm text-gray-600 mb-4">
                {"Avatar updated successfully!"}
            </p>
            <img
                src={props.image_url.clone()}
                alt="New Avatar"
                class="mx-auto max-h-64 rounded-lg object-contain"
            />
            <div class="flex justify-end mt-6">
                <button
                    type="button"
                    onclick={props.on_close.reform(|_| ())}
                    class="px-4 py-2 text-sm font-medium rounded-md
                           text-white bg-blue-600 hover:bg-blue-700"
                >
                    {"OK"}
                </button>
            </div>
        </Modal>
    }
}
