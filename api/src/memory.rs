use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::client::{FeedError, UserSource};
use crate::models::UserRecord;

const NAMES: &[(&str, &str)] = &[
    ("Leah", "Morris"),
    ("Jonas", "Nielsen"),
    ("Priya", "Sharma"),
    ("Tom", "Okafor"),
    ("Mina", "Kovacs"),
];

/// In-memory UserSource serving deterministic canned records, for tests.
#[derive(Clone, Debug, Default)]
pub struct StaticUserSource {
    served: Arc<AtomicUsize>,
}

impl StaticUserSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records handed out so far.
    pub fn served(&self) -> usize {
        self.served.load(Ordering::SeqCst)
    }
}

impl UserSource for StaticUserSource {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<UserRecord>, FeedError> {
        let start = self.served.fetch_add(count, Ordering::SeqCst);
        let batch = (start..start + count)
            .map(|n| {
                let (first, last) = NAMES[n % NAMES.len()];
                UserRecord {
                    id: format!("static-{n:06}"),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    email: format!(
                        "{}.{}{n}@example.com",
                        first.to_lowercase(),
                        last.to_lowercase()
                    ),
                    picture: format!("https://example.com/portraits/{n}.jpg"),
                }
            })
            .collect();
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_batches_are_distinct() {
        let source = StaticUserSource::new();

        let first = source.fetch_batch(4).await.unwrap();
        let second = source.fetch_batch(4).await.unwrap();
        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 4);
        assert_eq!(source.served(), 8);

        for a in &first {
            assert!(second.iter().all(|b| b.id != a.id));
        }
    }

    #[tokio::test]
    async fn test_records_are_well_formed() {
        let source = StaticUserSource::new();
        let batch = source.fetch_batch(7).await.unwrap();

        for user in &batch {
            assert!(!user.first_name.is_empty());
            assert!(user.email.contains('@'));
            assert!(user.picture.starts_with("https://"));
        }
    }
}
