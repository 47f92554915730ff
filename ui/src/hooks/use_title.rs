use yew::prelude::*;

/// Sets the document title to "{page} · Group Settings", or just
/// "Group Settings" while the page name is unknown.
#[hook]
pub fn use_title(page: Option<String>) {
    let title = match page {
        Some(page) => format!("{page} · Group Settings"),
        None => "Group Settings".to_string(),
    };
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
