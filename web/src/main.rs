use dioxus::prelude::*;

use ui::UserFeed;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        header {
            class: "app-header",
            h1 { "People" }
        }
        UserFeed {}
    }
}
