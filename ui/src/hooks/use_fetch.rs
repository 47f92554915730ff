use std::future::Future;
use std::rc::Rc;

use payloads::FetchOutcome;
use yew::prelude::*;

/// Whether a directory request has completed, and what it returned.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(FetchOutcome<T>),
}

impl<T> FetchState<T> {
    /// The fetched value, if the directory found one.
    pub fn found(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(FetchOutcome::Found(value)) => Some(value),
            _ => None,
        }
    }
}

/// Directory fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - Not fetched yet: "Loading {context}..."
    /// - `Failed`: error banner "Error loading {context}: ..."
    /// - `Empty`: "{Context} not found"
    /// - `Found`: `render_fn(data, is_loading)`, where `is_loading` is true
    ///   while a fetch for new deps is in flight
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool) -> Html,
    {
        match &self.data {
            FetchState::NotFetched => html! {
                <div class="text-center py-12">
                    <p class="text-gray-600">
                        {format!("Loading {}...", context)}
                    </p>
                </div>
            },
            FetchState::Fetched(FetchOutcome::Failed(error)) => html! {
                <div class="p-4 rounded-md bg-red-50 border border-red-200">
                    <p class="text-sm text-red-700">
                        {format!("Error loading {}: {}", context, error)}
                    </p>
                </div>
            },
            FetchState::Fetched(FetchOutcome::Empty) => html! {
                <div class="text-center py-12">
                    <p class="text-gray-600">
                        {format!("{} not found", capitalize(context))}
                    </p>
                </div>
            },
            FetchState::Fetched(FetchOutcome::Found(data)) => {
                render_fn(data, self.is_loading)
            }
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generic directory fetch hook.
///
/// Fetches on mount and whenever `deps` change. A fetch for new deps keeps
/// showing the previous outcome until the new one arrives.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = FetchOutcome<T>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let is_loading = use_state(|| false);

    let fetch = {
        let data = data.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, deps| {
            let data = data.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();
            let deps = deps.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let outcome = fetch_fn(deps).await;
                if let FetchOutcome::Failed(error) = &outcome {
                    tracing::warn!("Directory fetch failed: {error}");
                }
                data.set(FetchState::Fetched(outcome));

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    use_effect_with(deps, move |_| fetch.emit(()));

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::DirectoryError;

    #[test]
    fn test_found_only_for_found_outcome() {
        let found = FetchState::Fetched(FetchOutcome::Found(3));
        assert_eq!(found.found(), Some(&3));

        let empty: FetchState<u32> = FetchState::Fetched(FetchOutcome::Empty);
        assert_eq!(empty.found(), None);

        let failed: FetchState<u32> =
            FetchState::Fetched(FetchOutcome::Failed(DirectoryError::Network));
        assert_eq!(failed.found(), None);
        assert_eq!(FetchState::<u32>::NotFetched.found(), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("group"), "Group");
        assert_eq!(capitalize(""), "");
    }
}
