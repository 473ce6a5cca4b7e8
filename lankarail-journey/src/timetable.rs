use lankarail_core::{ClockTime, MINUTES_PER_DAY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One stop in a built timetable. Arrival and departure only differ at
/// stations whose dwell time is known; the builder models no dwell, so it
/// emits the same clock for both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteStation {
    pub name: String,
    pub code: String,
    pub arrival_time: ClockTime,
    pub departure_time: ClockTime,
}

/// An ordered station timetable for one train's run.
///
/// Invariants held by construction: at least two stations, unique names,
/// first station carries the departure clock and last the arrival clock.
/// Routes are rebuilt wholesale, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    id: String,
    name: String,
    stations: Vec<RouteStation>,
    distance_km: f64,
    duration_minutes: u32,
}

impl Route {
    /// Build a timetable by spreading the journey time evenly across the
    /// station sequence.
    ///
    /// Total journey minutes are `(arrival - departure) mod 1440`; with
    /// clock-only inputs an equal pair cannot be told apart from a
    /// same-time-next-day run, so 0 is read as a full 1440-minute journey.
    /// Intermediate stations get the cumulative elapsed time from departure
    /// (floored to whole minutes, wrapping at midnight); the endpoints get
    /// the given clocks exactly. Equal spacing is a simplifying assumption:
    /// the dataset carries no per-segment timing.
    pub fn build(
        departure: ClockTime,
        arrival: ClockTime,
        station_names: &[String],
        distance_km: f64,
    ) -> Result<Self, RouteError> {
        if station_names.len() < 2 {
            return Err(RouteError::TooFewStations(station_names.len()));
        }

        let mut seen = HashSet::new();
        for name in station_names {
            if !seen.insert(name.as_str()) {
                return Err(RouteError::DuplicateStation(name.clone()));
            }
        }

        let diff = departure.minutes_until(arrival);
        let total_minutes = if diff == 0 { MINUTES_PER_DAY } else { diff };
        let segments = (station_names.len() - 1) as f64;
        let minutes_per_segment = total_minutes as f64 / segments;

        let last_index = station_names.len() - 1;
        let mut stations = Vec::with_capacity(station_names.len());
        for (i, name) in station_names.iter().enumerate() {
            let time = if i == 0 {
                departure
            } else if i == last_index {
                arrival
            } else {
                let elapsed = (minutes_per_segment * i as f64).floor() as u32;
                departure.plus_minutes(elapsed)
            };
            stations.push(RouteStation {
                name: name.clone(),
                code: station_code(name),
                arrival_time: time,
                departure_time: time,
            });
        }

        let first = &station_names[0];
        let last = &station_names[last_index];
        Ok(Self {
            id: format!("{}-{}", first, last),
            name: format!("{} to {}", first, last),
            stations,
            distance_km,
            duration_minutes: total_minutes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stations(&self) -> &[RouteStation] {
        &self.stations
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn station_names(&self) -> Vec<String> {
        self.stations.iter().map(|s| s.name.clone()).collect()
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn departure_time(&self) -> ClockTime {
        self.stations[0].departure_time
    }

    pub fn arrival_time(&self) -> ClockTime {
        self.stations[self.stations.len() - 1].arrival_time
    }

    /// Distance between two named stations as their segment count's share of
    /// the route distance. Segments are assumed equally long, matching the
    /// equal-time assumption above.
    pub fn distance_between(&self, from: &str, to: &str) -> Option<f64> {
        let from_idx = self.stations.iter().position(|s| s.name == from)?;
        let to_idx = self.stations.iter().position(|s| s.name == to)?;
        let segments_between = from_idx.abs_diff(to_idx) as f64;
        let total_segments = (self.stations.len() - 1) as f64;
        Some(segments_between / total_segments * self.distance_km)
    }
}

/// Short display code for a station without a catalog entry.
fn station_code(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_ascii_uppercase()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("A route needs at least 2 stations, got {0}")]
    TooFewStations(usize),

    #[error("Duplicate station on route: {0}")]
    DuplicateStation(String),
}
