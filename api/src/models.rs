//! # Wire format and shared user model
//!
//! The random-user service wraps its payload in `{ "results": [...] }`; each
//! result is a deeply nested object of which the feed only needs four leaves:
//! `name.first` / `name.last`, `email`, `login.uuid`, and `picture.large`.
//! The nested wire structs stay private to this crate; the flattened
//! [`UserRecord`] is what crosses into the UI.

use serde::{Deserialize, Serialize};

/// A single user in the feed. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Upstream `login.uuid`. Unique per generated user, but the feed does
    /// not deduplicate on it.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// URL of the large profile image.
    pub picture: String,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Top-level response envelope: `{ "results": [...], "info": {...} }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub results: Vec<ApiUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiUser {
    pub name: ApiName,
    pub email: String,
    pub login: ApiLogin,
    pub picture: ApiPicture,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiLogin {
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPicture {
    pub large: String,
}

impl From<ApiUser> for UserRecord {
    fn from(user: ApiUser) -> Self {
        Self {
            id: user.login.uuid,
            first_name: user.name.first,
            last_name: user.name.last,
            email: user.email,
            picture: user.picture.large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed but structurally faithful randomuser.me response: the decoder
    // must tolerate the fields the feed ignores.
    const SAMPLE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": { "title": "Ms", "first": "Leah", "last": "Morris" },
                "email": "leah.morris@example.com",
                "login": { "uuid": "4f8e9a2b-1111-4c0d-9d1e-0a0b0c0d0e0f", "username": "purplecat1" },
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/42.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/42.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/42.jpg"
                },
                "nat": "GB"
            },
            {
                "name": { "title": "Mr", "first": "Jonas", "last": "Nielsen" },
                "email": "jonas.nielsen@example.com",
                "login": { "uuid": "7c1d2e3f-2222-4a5b-8c9d-1e2f3a4b5c6d" },
                "picture": {
                    "large": "https://randomuser.me/api/portraits/men/7.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/men/7.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/men/7.jpg"
                }
            }
        ],
        "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn test_decode_response() {
        let response: ApiResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.results.len(), 2);

        let records: Vec<UserRecord> =
            response.results.into_iter().map(UserRecord::from).collect();
        assert_eq!(records[0].first_name, "Leah");
        assert_eq!(records[0].last_name, "Morris");
        assert_eq!(records[0].email, "leah.morris@example.com");
        assert_eq!(records[0].id, "4f8e9a2b-1111-4c0d-9d1e-0a0b0c0d0e0f");
        assert_eq!(
            records[0].picture,
            "https://randomuser.me/api/portraits/women/42.jpg"
        );
        assert_eq!(records[1].full_name(), "Jonas Nielsen");
    }

    #[test]
    fn test_decode_preserves_order() {
        let response: ApiResponse = serde_json::from_str(SAMPLE).unwrap();
        let records: Vec<UserRecord> =
            response.results.into_iter().map(UserRecord::from).collect();
        assert_eq!(records[0].first_name, "Leah");
        assert_eq!(records[1].first_name, "Jonas");
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(serde_json::from_str::<ApiResponse>("{\"results\": 3}").is_err());
        assert!(serde_json::from_str::<ApiResponse>("not json").is_err());
    }
}
