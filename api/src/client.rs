//! # User source seam and the HTTP client behind it
//!
//! [`UserSource`] is the one seam between the feed and the network: a single
//! `fetch_batch` operation. The real implementation is [`RandomUserClient`],
//! a thin reqwest wrapper around the fixed random-user endpoint; tests drive
//! the same seam through [`crate::StaticUserSource`].

use crate::models::{ApiResponse, UserRecord};

/// Fixed upstream endpoint. The only tunable is the batch size query
/// parameter, passed per call.
pub const API_URL: &str = "https://randomuser.me/api/";

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Async source of user record batches.
pub trait UserSource {
    fn fetch_batch(
        &self,
        count: usize,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, FeedError>>;
}

/// HTTP client for the random-user service.
#[derive(Clone, Debug, Default)]
pub struct RandomUserClient {
    http: reqwest::Client,
}

impl RandomUserClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserSource for RandomUserClient {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<UserRecord>, FeedError> {
        let body = self
            .http
            .get(API_URL)
            .query(&[("results", count)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let response: ApiResponse = serde_json::from_str(&body)?;
        Ok(response.results.into_iter().map(UserRecord::from).collect())
    }
}
