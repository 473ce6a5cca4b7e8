use chrono::{DateTime, Utc};
use lankarail_catalog::TrainStatus;
use lankarail_core::ClockTime;
use serde::{Deserialize, Serialize};

/// A train's derived position along its route at some instant.
///
/// Never persisted as authoritative state: it is recomputed on demand from
/// the route and the clock, so a stale snapshot is always safe to discard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyPosition {
    pub train_id: String,
    pub train_number: String,
    pub last_station: String,
    pub next_station: String,
    pub last_station_time: ClockTime,
    pub next_station_time: ClockTime,
    /// Whole-journey completion, 0 at the source, 100 at the destination.
    pub progress_percent: f64,
    pub status: TrainStatus,
    pub route_stations: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl JourneyPosition {
    pub fn has_arrived(&self) -> bool {
        self.progress_percent >= 100.0
    }

    /// Human-readable time until the next station ("2 hr 5 min", "12 min").
    ///
    /// The next-station clock is read as the first occurrence of that time
    /// at or after `now`, which handles overnight segments.
    pub fn time_to_next_station(&self, now: ClockTime) -> String {
        let minutes = now.minutes_until(self.next_station_time);
        let hours = minutes / 60;
        let remainder = minutes % 60;
        if hours > 0 {
            format!("{} hr {} min", hours, remainder)
        } else {
            format!("{} min", remainder)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(next_time: &str, progress: f64) -> JourneyPosition {
        JourneyPosition {
            train_id: "1".to_string(),
            train_number: "UCR-1059".to_string(),
            last_station: "Gampaha".to_string(),
            next_station: "Polgahawela".to_string(),
            last_station_time: "06:40".parse().unwrap(),
            next_station_time: next_time.parse().unwrap(),
            progress_percent: progress,
            status: TrainStatus::OnTime,
            route_stations: vec![],
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_time_to_next_station_under_an_hour() {
        let p = position("07:15", 30.0);
        assert_eq!(p.time_to_next_station("07:03".parse().unwrap()), "12 min");
    }

    #[test]
    fn test_time_to_next_station_over_an_hour() {
        let p = position("09:20", 30.0);
        assert_eq!(
            p.time_to_next_station("07:15".parse().unwrap()),
            "2 hr 5 min"
        );
    }

    #[test]
    fn test_time_to_next_station_across_midnight() {
        let p = position("00:10", 80.0);
        assert_eq!(p.time_to_next_station("23:50".parse().unwrap()), "20 min");
    }

    #[test]
    fn test_arrival_flag() {
        assert!(position("07:15", 100.0).has_arrived());
        assert!(!position("07:15", 99.9).has_arrived());
    }
}
