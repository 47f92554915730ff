use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A dialog over a dimmed backdrop. Clicking the backdrop closes it.
///
/// Buttons are up to the caller; pass them as part of `children`.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub children: Html,
    /// Called when user clicks backdrop
    pub on_close: Callback<()>,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            // Ignore clicks that land inside the dialog itself
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div
                role="dialog"
                aria-modal="true"
                class="bg-white rounded-xl shadow-xl w-full max-w-md p-6"
            >
                <h3 class="text-lg font-semibold text-gray-900 mb-4">
                    {&props.title}
                </h3>
                {props.children.clone()}
            </div>
        </div>
    }
}
