use api::UserRecord;
use dioxus::prelude::*;

/// A single profile card: avatar, full name, email.
///
/// `dom_id` lands on the root element so the visibility trigger can find the
/// card when it is the last one in the feed.
#[component]
pub fn UserCard(dom_id: String, user: UserRecord) -> Element {
    rsx! {
        div {
            id: "{dom_id}",
            class: "user-card",
            img {
                class: "user-card-avatar",
                src: "{user.picture}",
                alt: "Portrait of {user.full_name()}",
            }
            div {
                class: "user-card-body",
                span { class: "user-card-name", "{user.full_name()}" }
                span { class: "user-card-email", "{user.email}" }
            }
        }
    }
}
