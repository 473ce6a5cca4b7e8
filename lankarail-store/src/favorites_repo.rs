use crate::kv::{KeyValueStore, StoreError};
use std::sync::Arc;

const KEY: &str = "favorite_trains";

/// Train ids the user has starred.
pub struct FavoritesRepo {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesRepo {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<String>, StoreError> {
        match self.store.get(KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Flip the starred state; returns whether the train is now a favorite.
    pub async fn toggle(&self, train_id: &str) -> Result<bool, StoreError> {
        let mut favorites = self.load().await?;
        let added = if let Some(pos) = favorites.iter().position(|id| id == train_id) {
            favorites.remove(pos);
            false
        } else {
            favorites.push(train_id.to_string());
            true
        };
        self.store
            .set(KEY, serde_json::to_value(&favorites)?)
            .await?;
        Ok(added)
    }

    pub async fn is_favorite(&self, train_id: &str) -> Result<bool, StoreError> {
        Ok(self.load().await?.iter().any(|id| id == train_id))
    }

    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let repo = FavoritesRepo::new(Arc::new(MemoryStore::new()));

        assert!(repo.toggle("7").await.unwrap());
        assert!(repo.is_favorite("7").await.unwrap());

        assert!(!repo.toggle("7").await.unwrap());
        assert!(!repo.is_favorite("7").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = FavoritesRepo::new(Arc::new(MemoryStore::new()));
        repo.toggle("3").await.unwrap();
        repo.toggle("1").await.unwrap();
        assert_eq!(repo.list().await.unwrap(), vec!["3", "1"]);
    }
}
