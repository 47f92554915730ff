use std::ops::Deref;
use std::rc::Rc;

use payloads::{GroupDirectory, StaticDirectory};
use yew::prelude::*;

/// Shared handle to the app's group directory.
#[derive(Clone)]
pub struct DirectoryHandle(Rc<dyn GroupDirectory>);

impl DirectoryHandle {
    pub fn new(directory: Rc<dyn GroupDirectory>) -> Self {
        Self(directory)
    }
}

impl PartialEq for DirectoryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for DirectoryHandle {
    type Target = dyn GroupDirectory;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Properties, PartialEq)]
pub struct DirectoryProviderProps {
    pub directory: DirectoryHandle,
    pub children: Children,
}

#[function_component]
pub fn DirectoryProvider(props: &DirectoryProviderProps) -> Html {
    html! {
        <ContextProvider<DirectoryHandle> context={props.directory.clone()}>
            {props.children.clone()}
        </ContextProvider<DirectoryHandle>>
    }
}

/// The directory provided above this component. Falls back to the built-in
/// demo directory when rendered outside a `DirectoryProvider`.
#[hook]
pub fn use_directory() -> DirectoryHandle {
    let fallback = use_memo((), |_| {
        DirectoryHandle::new(Rc::new(StaticDirectory::default()))
    });
    use_context::<DirectoryHandle>().unwrap_or_else(|| (*fallback).clone())
}
