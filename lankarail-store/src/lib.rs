pub mod app_config;
pub mod booking_repo;
pub mod favorites_repo;
pub mod kv;
pub mod notification_repo;
pub mod profile_repo;
pub mod search_repo;

pub use app_config::{BusinessRules, Config};
pub use booking_repo::BookingRepo;
pub use favorites_repo::FavoritesRepo;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use notification_repo::{Notification, NotificationKind, NotificationRepo};
pub use profile_repo::{ProfileRepo, UserProfile};
pub use search_repo::{RecentSearch, SearchRepo};
