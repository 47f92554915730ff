use std::future::Future;

use yew::prelude::*;

use crate::contexts::{Toast, use_toast};
use crate::utils::copy_to_clipboard;

/// How long the "Copied!" notification stays up.
const COPIED_TOAST_MS: u32 = 1500;

/// Wait for a clipboard write to settle and pick the toast reporting it.
pub async fn copy_with_toast<C>(copy: C) -> Toast
where
    C: Future<Output = Result<(), String>>,
{
    match copy.await {
        Ok(()) => {
            tracing::info!("Copied invite link");
            Toast::success("Invite link copied successfully.")
                .titled("Copied!")
                .duration(COPIED_TOAST_MS)
        }
        Err(e) => {
            tracing::warn!("Could not copy invite link: {e}");
            Toast::error(
                "Could not copy the invite link. Copy it from the field \
                 instead.",
            )
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub link: AttrValue,
}

/// Read-only invite link with a copy button.
#[function_component]
pub fn InviteLink(props: &Props) -> Html {
    let toasts = use_toast();

    let on_copy = {
        let link = props.link.clone();

        Callback::from(move |_: MouseEvent| {
            let link = link.clone();
            let toasts = toasts.clone();

            yew::platform::spawn_local(async move {
                toasts.add(copy_with_toast(copy_to_clipboard(&link)).await);
            });
        })
    };

    html! {
        <div class="w-full lg:w-1/3">
            <h3 class="text-sm font-semibold mb-1">{"Invite Link"}</h3>
            <div class="flex items-center gap-2">
                <input
                    type="text"
                    readonly=true
                    value={props.link.clone()}
                    class="w-full px-3 py-2 rounded-md border border-gray-300 text-sm"
                />
                <button
                    type="button"
                    onclick={on_copy}
                    class="flex items-center gap-1 text-blue-600 text-sm hover:underline"
                >
                    {"Copy"}
                </button>
            </div>
            <p class="text-xs text-gray-400 mt-1">
                {"Only share with people you trust."}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::contexts::ToastType;

    #[test]
    fn test_successful_copy_shows_copied_toast() {
        let toast = block_on(copy_with_toast(async { Ok::<(), String>(()) }));

        assert_eq!(toast.toast_type, ToastType::Success);
        assert_eq!(toast.title.as_deref(), Some("Copied!"));
        assert_eq!(toast.message, "Invite link copied successfully.");
        assert_eq!(toast.duration, 1500);
    }

    #[test]
    fn test_failed_copy_shows_error_toast() {
        let toast = block_on(copy_with_toast(async {
            Err::<(), _>("Clipboard write was blocked".to_string())
        }));

        assert_eq!(toast.toast_type, ToastType::Error);
        assert_eq!(toast.title, None);
        assert!(toast.message.starts_with("Could not copy the invite link"));
    }
}
