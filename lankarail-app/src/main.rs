use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use lankarail_booking::{BookingManager, MockPaymentAdapter};
use lankarail_catalog::{Catalog, FareCalculator};
use lankarail_journey::JourneyTracker;
use lankarail_shared::{format_price, Currency};
use lankarail_store::{BookingRepo, Config, JsonFileStore, NotificationRepo, SearchRepo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lankarail=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let currency = Currency::from_str(&config.display.currency)?;

    let catalog = Catalog::load()?;
    tracing::info!(
        trains = catalog.trains().len(),
        stations = catalog.stations().len(),
        "catalog loaded"
    );

    let store = Arc::new(JsonFileStore::open(&config.storage.path).await?);
    let bookings = BookingRepo::new(store.clone());
    let searches = SearchRepo::new(store.clone());
    let notifications = NotificationRepo::new(store.clone());

    let mut booking_manager = BookingManager::new(
        FareCalculator::new(
            config.business_rules.service_fee,
            config.business_rules.tax_amount,
        ),
        Arc::new(MockPaymentAdapter::default()),
    )
    .with_max_passengers(config.business_rules.max_passengers);

    for booking in bookings.list().await? {
        tracing::info!(
            reference = %booking.reference,
            date = %booking.journey_date,
            total = %format_price(booking.total_fare, currency),
            "stored booking"
        );
        booking_manager.restore(booking);
    }
    for search in searches.list().await? {
        tracing::debug!(from = %search.source, to = %search.destination, "recent search");
    }
    let unread = notifications.unread_count().await?;
    if unread > 0 {
        tracing::info!(unread, "unread notifications");
    }

    let mut tracker = JourneyTracker::new(&catalog)?;
    let mut ticker =
        tokio::time::interval(Duration::from_secs(config.tracker.refresh_interval_seconds));

    loop {
        ticker.tick().await;
        let active = tracker.refresh(&catalog, Utc::now());
        tracing::info!(active, "tracker refreshed");

        for position in tracker.active_positions() {
            tracing::info!(
                train = %position.train_number,
                last = %position.last_station,
                next = %position.next_station,
                progress = format!("{:.1}%", position.progress_percent),
                "journey position"
            );
        }
    }
}
