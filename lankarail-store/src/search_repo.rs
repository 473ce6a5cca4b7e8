use crate::kv::{KeyValueStore, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "recent_searches";
const MAX_RECENT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentSearch {
    pub source: String,
    pub destination: String,
    pub searched_at: DateTime<Utc>,
}

/// Remembers the station pairs the user searched, newest first, capped at
/// ten. Repeating a pair moves it to the front instead of duplicating it.
pub struct SearchRepo {
    store: Arc<dyn KeyValueStore>,
}

impl SearchRepo {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<RecentSearch>, StoreError> {
        match self.store.get(KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn record(&self, source: &str, destination: &str) -> Result<(), StoreError> {
        let mut searches = self.load().await?;
        searches.retain(|s| {
            !(s.source.eq_ignore_ascii_case(source)
                && s.destination.eq_ignore_ascii_case(destination))
        });
        searches.insert(
            0,
            RecentSearch {
                source: source.to_string(),
                destination: destination.to_string(),
                searched_at: Utc::now(),
            },
        );
        searches.truncate(MAX_RECENT);
        self.store.set(KEY, serde_json::to_value(&searches)?).await
    }

    pub async fn list(&self) -> Result<Vec<RecentSearch>, StoreError> {
        self.load().await
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[tokio::test]
    async fn test_newest_first_and_dedup() {
        let repo = SearchRepo::new(Arc::new(MemoryStore::new()));
        repo.record("Colombo Fort", "Kandy").await.unwrap();
        repo.record("Colombo Fort", "Badulla").await.unwrap();
        repo.record("colombo fort", "kandy").await.unwrap();

        let searches = repo.list().await.unwrap();
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[0].destination, "kandy");
        assert_eq!(searches[1].destination, "Badulla");
    }

    #[tokio::test]
    async fn test_capped_at_ten() {
        let repo = SearchRepo::new(Arc::new(MemoryStore::new()));
        for i in 0..15 {
            repo.record("Colombo Fort", &format!("Station {}", i))
                .await
                .unwrap();
        }
        let searches = repo.list().await.unwrap();
        assert_eq!(searches.len(), 10);
        assert_eq!(searches[0].destination, "Station 14");
    }
}
