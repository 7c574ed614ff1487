//! This crate contains all shared UI for the workspace.

mod feed;
pub use feed::UserFeed;

mod user_card;
pub use user_card::UserCard;

mod loading_indicator;
pub use loading_indicator::LoadingIndicator;

mod visibility;
pub use visibility::use_visibility_trigger;
