use crate::fare::FareTable;
use lankarail_core::ClockTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational status of a scheduled service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Cancelled,
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrainStatus::OnTime => "On Time",
            TrainStatus::Delayed => "Delayed",
            TrainStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

impl FromStr for TrainStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "On Time" => Ok(TrainStatus::OnTime),
            "Delayed" => Ok(TrainStatus::Delayed),
            "Cancelled" => Ok(TrainStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown train status: {0}")]
pub struct UnknownStatus(pub String);

/// How often a service runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekdays,
    Weekends,
}

impl FromStr for Frequency {
    type Err = UnknownFrequency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" => Ok(Frequency::Daily),
            "Weekdays" => Ok(Frequency::Weekdays),
            "Weekends" => Ok(Frequency::Weekends),
            other => Err(UnknownFrequency(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown frequency: {0}")]
pub struct UnknownFrequency(pub String);

/// A railway station as listed in the static dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub code: String,
    pub city: String,
    pub state: String,
    pub address: String,
}

/// A scheduled train service. Read-only at runtime; the dataset is the
/// source of truth and records are normalized once at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSchedule {
    pub id: String,
    pub name: String,
    pub number: String,
    pub source: String,
    pub destination: String,
    pub departure_time: ClockTime,
    pub arrival_time: ClockTime,
    pub duration_minutes: u32,
    pub distance_km: f64,
    pub fare: FareTable,
    pub amenities: Vec<String>,
    pub status: TrainStatus,
    pub category: String,
    pub frequency: Frequency,
}

impl TrainSchedule {
    /// Journey length derived from the departure/arrival clocks, in minutes.
    ///
    /// Clock-only data cannot distinguish a zero-length journey from one
    /// taking exactly a day; an equal pair is read as a full day.
    pub fn journey_minutes(&self) -> u32 {
        let diff = self.departure_time.minutes_until(self.arrival_time);
        if diff == 0 {
            lankarail_core::MINUTES_PER_DAY
        } else {
            diff
        }
    }

    /// True when the arrival clock falls on the day after departure.
    pub fn is_overnight(&self) -> bool {
        self.arrival_time.minutes_of_day() <= self.departure_time.minutes_of_day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::FareTable;

    fn schedule(dep: &str, arr: &str) -> TrainSchedule {
        TrainSchedule {
            id: "t1".to_string(),
            name: "Test Express".to_string(),
            number: "TE-1".to_string(),
            source: "Colombo Fort".to_string(),
            destination: "Kandy".to_string(),
            departure_time: dep.parse().unwrap(),
            arrival_time: arr.parse().unwrap(),
            duration_minutes: 0,
            distance_km: 120.0,
            fare: FareTable::Flat { base: 500.0 },
            amenities: vec![],
            status: TrainStatus::OnTime,
            category: "Express".to_string(),
            frequency: Frequency::Daily,
        }
    }

    #[test]
    fn test_journey_minutes_daytime() {
        assert_eq!(schedule("05:55", "14:30").journey_minutes(), 515);
    }

    #[test]
    fn test_journey_minutes_overnight() {
        let s = schedule("20:00", "06:15");
        assert_eq!(s.journey_minutes(), 615);
        assert!(s.is_overnight());
    }

    #[test]
    fn test_equal_clocks_mean_full_day() {
        assert_eq!(schedule("08:00", "08:00").journey_minutes(), 1440);
    }

    #[test]
    fn test_status_parse_and_display() {
        let s: TrainStatus = "On Time".parse().unwrap();
        assert_eq!(s, TrainStatus::OnTime);
        assert_eq!(s.to_string(), "On Time");
        assert!("Floating".parse::<TrainStatus>().is_err());
    }
}
