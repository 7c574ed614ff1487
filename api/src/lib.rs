//! # API crate — data layer for the user feed
//!
//! Everything the feed UI needs to talk to the random-user service lives here:
//! the wire format and the shared [`UserRecord`] model ([`models`]), the HTTP
//! client behind the [`UserSource`] seam ([`client`]), and the plain
//! append/loading bookkeeping the view drives ([`feed`]).
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `UserSource` trait, `RandomUserClient` (reqwest), `FeedError` |
//! | [`feed`] | `FeedState`: accumulated sequence + loading flag + last error |
//! | [`models`] | Upstream wire structs and the client-safe `UserRecord` projection |

pub mod client;
pub mod feed;
pub mod models;

mod memory;
pub use memory::StaticUserSource;

pub use client::{FeedError, RandomUserClient, UserSource};
pub use feed::FeedState;
pub use models::UserRecord;

/// Number of records requested per fetch.
pub const BATCH_SIZE: usize = 10;
