use crate::kv::{KeyValueStore, StoreError};
use lankarail_booking::Booking;
use std::sync::Arc;
use uuid::Uuid;

const KEY: &str = "bookings";

/// Persists booking snapshots so tickets survive app restarts.
pub struct BookingRepo {
    store: Arc<dyn KeyValueStore>,
}

impl BookingRepo {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<Booking>, StoreError> {
        match self.store.get(KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        self.store.set(KEY, serde_json::to_value(bookings)?).await
    }

    /// Insert or replace the snapshot for this booking id.
    pub async fn upsert(&self, booking: &Booking) -> Result<(), StoreError> {
        let mut bookings = self.load().await?;
        match bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => *existing = booking.clone(),
            None => bookings.push(booking.clone()),
        }
        self.save(&bookings).await
    }

    pub async fn get(&self, id: &Uuid) -> Result<Option<Booking>, StoreError> {
        Ok(self.load().await?.into_iter().find(|b| b.id == *id))
    }

    /// All persisted bookings, newest first.
    pub async fn list(&self) -> Result<Vec<Booking>, StoreError> {
        let mut bookings = self.load().await?;
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), StoreError> {
        let mut bookings = self.load().await?;
        bookings.retain(|b| b.id != *id);
        self.save(&bookings).await
    }
}
