use yew::prelude::*;

use crate::contexts::{Toast, ToastType};

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

/// Tailwind colours and the leading mark for each kind of toast.
fn palette(toast_type: ToastType) -> (&'static str, &'static str) {
    match toast_type {
        ToastType::Error => ("bg-red-50 border-red-200 text-red-700", "✕"),
        ToastType::Success => {
            ("bg-green-50 border-green-200 text-green-700", "✓")
        }
    }
}

/// A single notification. No buttons: it goes away when its timer fires.
#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast = &props.toast;
    let (colours, mark) = palette(toast.toast_type);

    html! {
        <div
            role="status"
            class={classes!("p-4", "rounded-lg", "border", "shadow-lg", colours)}
        >
            <div class="flex items-start gap-3">
                <span class="text-sm font-medium">{mark}</span>
                <div class="flex-1 min-w-0 text-sm leading-5">
                    if let Some(title) = &toast.title {
                        <p class="font-semibold">{title}</p>
                    }
                    <p>{&toast.message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_toast_type() {
        let (error, _) = palette(ToastType::Error);
        let (success, _) = palette(ToastType::Success);
        assert!(error.contains("bg-red-50"));
        assert!(success.contains("bg-green-50"));
    }
}
