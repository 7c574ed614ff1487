use dioxus::prelude::*;

/// Spinner shown at the bottom of the feed while a fetch is outstanding.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "feed-loading",
            div { class: "feed-loading-spinner" }
            span { "Loading more users…" }
        }
    }
}
