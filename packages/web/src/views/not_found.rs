use dioxus::prelude::*;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! { ui::NotFoundPage {} }
}
