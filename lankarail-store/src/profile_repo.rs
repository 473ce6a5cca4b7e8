use crate::kv::{KeyValueStore, StoreError};
use lankarail_catalog::FareClass;
use lankarail_shared::{Currency, Masked};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "user_profile";

/// Traveller profile kept on the device. There is no sign-in; one profile
/// per installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub preferred_class: FareClass,
    pub preferred_currency: Currency,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: Masked(String::new()),
            phone: Masked(String::new()),
            preferred_class: FareClass::SecondClass,
            preferred_currency: Currency::Lkr,
        }
    }
}

pub struct ProfileRepo {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileRepo {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        match self.store.get(KEY).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub async fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.store.set(KEY, serde_json::to_value(profile)?).await
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(KEY).await
    }
}
