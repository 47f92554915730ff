use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::Modal;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Called with the chosen file when the user confirms with a file
    /// selected.
    pub on_upload: Callback<File>,
    /// Called on cancel, backdrop click, or confirming with no file.
    pub on_close: Callback<()>,
}

/// Prompt for a new group photo. Reading the file is left to the caller.
#[function_component]
pub fn AvatarUploadModal(props: &Props) -> Html {
    let file_input_ref = use_node_ref();

    let on_confirm = {
        let file_input_ref = file_input_ref.clone();
        let on_upload = props.on_upload.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_: MouseEvent| {
            let file = file_input_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            match file {
                Some(file) => on_upload.emit(file),
                None => on_close.emit(()),
            }
        })
    };

    html! {
        <Modal title="Upload New Group Photo" on_close={props.on_close.clone()}>
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                aria-label="Upload your group photo"
                class="w-full text-sm text-gray-700 file:mr-3 file:px-3
                       file:py-2 file:rounded-md file:border-0
                       file:bg-blue-50 file:text-blue-700"
            />
            <div class="flex justify-end gap-2 mt-6">
                <button
                    type="button"
                    onclick={props.on_close.reform(|_| ())}
                    class="px-4 py-2 text-sm font-medium rounded-md
                           text-gray-700 bg-gray-200 hover:bg-gray-300"
                >
                    {"Cancel"}
                </button>
                <button
                    type="button"
                    onclick={on_confirm}
                    class="px-4 py-2 text-sm font-medium rounded-md
                           text-white bg-blue-600 hover:bg-blue-700"
                >
                    {"Upload"}
                </button>
            </div>
        </Modal>
    }
}
