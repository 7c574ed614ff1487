//! The infinite-scrolling feed itself.
//!
//! [`UserFeed`] owns the feed state and a single loader coroutine. The
//! coroutine fetches one batch when the component mounts, then one batch per
//! message from the visibility trigger. Because messages are drained one at a
//! time, fetches are sequential by construction; `begin_load` additionally
//! refuses re-entry in case a burst of intersection events queues up faster
//! than a fetch completes.

use dioxus::prelude::*;
use futures_util::StreamExt;

use api::{FeedState, RandomUserClient, UserSource, BATCH_SIZE};

use crate::{use_visibility_trigger, LoadingIndicator, UserCard};

const FEED_CSS: Asset = asset!("/assets/styling/feed.css");

/// DOM id of the card at `index`. The visibility trigger watches the last one.
fn card_dom_id(index: usize) -> String {
    format!("user-card-{index}")
}

#[component]
pub fn UserFeed() -> Element {
    let feed = use_signal(FeedState::new);

    let loader = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        let client = RandomUserClient::new();
        // Initial batch, before any scrolling has happened.
        load_batch(&client, feed).await;
        while rx.next().await.is_some() {
            load_batch(&client, feed).await;
        }
    });

    // Follows the tail of the list: recomputes on every append, which makes
    // the trigger re-attach to the new last card.
    let tail_id = use_memo(move || {
        let len = feed.read().users.len();
        (len > 0).then(|| card_dom_id(len - 1))
    });
    use_visibility_trigger(tail_id, loader);

    let state = feed();
    let error = state.error.clone();

    rsx! {
        document::Stylesheet { href: FEED_CSS }

        div {
            class: "user-feed",
            for (index, user) in state.users.iter().enumerate() {
                UserCard {
                    dom_id: card_dom_id(index),
                    user: user.clone(),
                }
            }
            if state.loading {
                LoadingIndicator {}
            }
            if let Some(message) = error {
                div {
                    class: "feed-error",
                    "Could not load more users: {message}"
                }
            }
        }
    }
}

async fn load_batch<S: UserSource>(source: &S, mut feed: Signal<FeedState>) {
    if !feed.write().begin_load() {
        return;
    }
    match source.fetch_batch(BATCH_SIZE).await {
        Ok(batch) => feed.write().complete(batch),
        Err(err) => {
            tracing::error!("failed to load user batch: {err}");
            feed.write().fail(&err);
        }
    }
}
