use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

/// How long a toast stays up unless told otherwise.
const DEFAULT_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Error,
    Success,
}

/// A transient notification. Toasts have no confirm button; they disappear
/// on their own once `duration` elapses.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: Option<String>,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: u32, // milliseconds
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            message: message.into(),
            toast_type,
            duration: DEFAULT_DURATION_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration = duration_ms;
        self
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|toast| toast.id != id),
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    /// Show `toast` and schedule its removal.
    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration_ms = toast.duration;
        let context = self.context.clone();

        self.context.dispatch(ToastAction::Add(toast));

        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            context.dispatch(ToastAction::Remove(toast_id));
        });
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle { context }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ToastState, action: ToastAction) -> ToastState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_builder() {
        let toast = Toast::success("Invite link copied successfully.")
            .titled("Copied!")
            .duration(1500);
        assert_eq!(toast.title.as_deref(), Some("Copied!"));
        assert_eq!(toast.toast_type, ToastType::Success);
        assert_eq!(toast.duration, 1500);
        assert_eq!(Toast::error("x").duration, DEFAULT_DURATION_MS);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let first = Toast::success("first");
        let second = Toast::error("second");
        let state = reduce(
            reduce(ToastState::default(), ToastAction::Add(first.clone())),
            ToastAction::Add(second.clone()),
        );
        assert_eq!(state.toasts, vec![first, second]);
    }

    #[test]
    fn test_remove_only_named_toast() {
        let first = Toast::success("first");
        let second = Toast::success("second");
        let state = ToastState {
            toasts: vec![first.clone(), second.clone()],
        };

        let state = reduce(state, ToastAction::Remove(first.id));
        assert_eq!(state.toasts, vec![second.clone()]);

        // Already gone
        let state = reduce(state, ToastAction::Remove(first.id));
        assert_eq!(state.toasts, vec![second]);
    }
}
