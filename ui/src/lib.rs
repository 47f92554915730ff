use std::rc::Rc;

use payloads::{APIClient, DEFAULT_GROUP_SLUG, StaticDirectory};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

use components::ToastContainer;
use contexts::{DirectoryHandle, DirectoryProvider, ToastProvider};
use pages::{GroupSettingsPage, NotFoundPage};

pub use logs::init_logging;

/// The directory the app reads groups from.
///
/// With `BACKEND_URL` set at build time, groups come from that backend.
/// Otherwise the built-in demo group is served.
fn get_directory() -> DirectoryHandle {
    match option_env!("BACKEND_URL") {
        Some(address) => DirectoryHandle::new(Rc::new(APIClient {
            address: address.to_string(),
            inner_client: reqwest::Client::new(),
        })),
        None => DirectoryHandle::new(Rc::new(StaticDirectory::default())),
    }
}

#[function_component]
pub fn App() -> Html {
    let directory = use_memo((), |_| get_directory());

    html! {
        <DirectoryProvider directory={(*directory).clone()}>
            <ToastProvider>
                <BrowserRouter>
                    <div class="min-h-screen bg-gray-100 text-gray-900">
                        <Switch<Route> render={switch} />
                    </div>
                    <ToastContainer />
                </BrowserRouter>
            </ToastProvider>
        </DirectoryProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[at("/groups/:slug")]
    GroupSettings { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <Redirect<Route> to={Route::GroupSettings {
                slug: DEFAULT_GROUP_SLUG.to_string(),
            }} />
        },
        // Keyed so switching groups starts from fresh screen state
        Route::GroupSettings { slug } => html! {
            <GroupSettingsPage
                key={slug.clone()}
                slug={AttrValue::from(slug.clone())}
            />
        },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <NotFoundPage />
            </main>
        },
    }
}

#[cfg(test)]
mod tests {
    use yew::virtual_dom::Key;

    use super::*;

    #[test]
    fn test_group_page_is_keyed_by_slug() {
        let page = |slug: &str| {
            switch(Route::GroupSettings {
                slug: slug.to_string(),
            })
        };

        assert_eq!(page("a").key(), Some(&Key::from("a")));
        assert_eq!(page("b").key(), Some(&Key::from("b")));
    }
}
