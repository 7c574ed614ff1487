//! # Feed bookkeeping
//!
//! [`FeedState`] owns the accumulated sequence of fetched records and the
//! loading flag the view renders from. It is a plain struct, kept out of the
//! component layer so the append/guard behaviour can be unit tested without
//! a browser.
//!
//! The sequence is append-only: insertion order is display order, and the
//! upstream API can hand back duplicates — they are kept as-is.

use crate::client::FeedError;
use crate::models::UserRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub users: Vec<UserRecord>,
    /// True exactly while a fetch is outstanding.
    pub loading: bool,
    /// Message of the most recent failed fetch, cleared by the next success.
    pub error: Option<String>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as outstanding. Returns `false` when one already is,
    /// so a burst of intersection events cannot stack requests.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Appends a completed batch and clears the loading flag.
    pub fn complete(&mut self, batch: Vec<UserRecord>) {
        self.users.extend(batch);
        self.loading = false;
        self.error = None;
    }

    /// Records a failed fetch. The sequence is left untouched.
    pub fn fail(&mut self, err: &FeedError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }
}
