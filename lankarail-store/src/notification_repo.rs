use crate::kv::{KeyValueStore, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

const KEY: &str = "notifications";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    BookingConfirmation,
    TripReminder,
    DelayAlert,
    PriceChange,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            body: body.into(),
            read: false,
            created_at: Utc::now(),
        }
    }
}

/// On-device notification inbox, newest first.
pub struct NotificationRepo {
    store: Arc<dyn KeyValueStore>,
}

impl NotificationRepo {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<Notification>, StoreError> {
        match self.store.get(KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, notifications: &[Notification]) -> Result<(), StoreError> {
        self.store
            .set(KEY, serde_json::to_value(notifications)?)
            .await
    }

    pub async fn push(&self, notification: Notification) -> Result<(), StoreError> {
        let mut notifications = self.load().await?;
        notifications.insert(0, notification);
        self.save(&notifications).await
    }

    pub async fn list(&self) -> Result<Vec<Notification>, StoreError> {
        self.load().await
    }

    pub async fn unread_count(&self) -> Result<usize, StoreError> {
        Ok(self.load().await?.iter().filter(|n| !n.read).count())
    }

    pub async fn mark_read(&self, id: &Uuid) -> Result<(), StoreError> {
        let mut notifications = self.load().await?;
        if let Some(n) = notifications.iter_mut().find(|n| n.id == *id) {
            n.read = true;
        }
        self.save(&notifications).await
    }

    pub async fn mark_all_read(&self) -> Result<(), StoreError> {
        let mut notifications = self.load().await?;
        for n in &mut notifications {
            n.read = true;
        }
        self.save(&notifications).await
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), StoreError> {
        let mut notifications = self.load().await?;
        notifications.retain(|n| n.id != *id);
        self.save(&notifications).await
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn repo() -> NotificationRepo {
        NotificationRepo::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_push_is_newest_first() {
        let repo = repo();
        repo.push(Notification::new(
            NotificationKind::BookingConfirmation,
            "Booking confirmed",
            "BK1A2B3C4D is confirmed",
        ))
        .await
        .unwrap();
        repo.push(Notification::new(
            NotificationKind::DelayAlert,
            "Delay",
            "Udarata Menike is running late",
        ))
        .await
        .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].kind, NotificationKind::DelayAlert);
    }

    #[tokio::test]
    async fn test_read_tracking() {
        let repo = repo();
        let n = Notification::new(NotificationKind::TripReminder, "Tomorrow", "Kandy at 05:55");
        let id = n.id;
        repo.push(n).await.unwrap();
        repo.push(Notification::new(NotificationKind::System, "Hi", "Welcome"))
            .await
            .unwrap();

        assert_eq!(repo.unread_count().await.unwrap(), 2);
        repo.mark_read(&id).await.unwrap();
        assert_eq!(repo.unread_count().await.unwrap(), 1);
        repo.mark_all_read().await.unwrap();
        assert_eq!(repo.unread_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_single() {
        let repo = repo();
        let n = Notification::new(NotificationKind::System, "Bye", "Removed");
        let id = n.id;
        repo.push(n).await.unwrap();
        repo.delete(&id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
