use crate::fare::{FareError, RawFare};
use crate::schedule::{StationRecord, TrainSchedule};
use lankarail_core::{parse_duration, ClockTimeError, DurationParseError};
use serde::Deserialize;
use std::collections::HashMap;

const TRAINS_JSON: &str = include_str!("../data/trains.json");
const STATIONS_JSON: &str = include_str!("../data/stations.json");
const ROUTES_JSON: &str = include_str!("../data/routes.json");

/// Synthetic fallback spacing for routes without curated stop lists:
/// roughly one stop per 30 km, never fewer than five.
const KM_PER_SYNTHETIC_STOP: f64 = 30.0;
const MIN_SYNTHETIC_STOPS: usize = 5;

/// A train record as it sits in the dataset, before normalization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTrain {
    id: String,
    name: String,
    number: String,
    source: String,
    destination: String,
    departure_time: String,
    arrival_time: String,
    duration: String,
    distance: f64,
    fare: RawFare,
    amenities: Vec<String>,
    status: String,
    #[serde(rename = "type")]
    category: String,
    frequency: String,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    source: String,
    destination: String,
    stops: Vec<String>,
}

/// The static train/station dataset, normalized and indexed at load time.
///
/// This is the app's stand-in for a backend: read-only after `load`, safe to
/// share behind an `Arc`.
pub struct Catalog {
    trains: Vec<TrainSchedule>,
    stations: Vec<StationRecord>,
    curated_stops: HashMap<(String, String), Vec<String>>,
}

impl Catalog {
    /// Load the embedded dataset.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(TRAINS_JSON, STATIONS_JSON, ROUTES_JSON)
    }

    /// Load from explicit JSON documents (exposed for tests and tooling).
    pub fn from_json(
        trains_json: &str,
        stations_json: &str,
        routes_json: &str,
    ) -> Result<Self, CatalogError> {
        let raw_trains: Vec<RawTrain> = serde_json::from_str(trains_json)?;
        let stations: Vec<StationRecord> = serde_json::from_str(stations_json)?;
        let raw_routes: Vec<RawRoute> = serde_json::from_str(routes_json)?;

        let trains = raw_trains
            .into_iter()
            .map(normalize_train)
            .collect::<Result<Vec<_>, _>>()?;

        let curated_stops = raw_routes
            .into_iter()
            .map(|r| ((r.source, r.destination), r.stops))
            .collect();

        Ok(Self {
            trains,
            stations,
            curated_stops,
        })
    }

    pub fn trains(&self) -> &[TrainSchedule] {
        &self.trains
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn train_by_id(&self, id: &str) -> Option<&TrainSchedule> {
        self.trains.iter().find(|t| t.id == id)
    }

    pub fn station_by_name(&self, name: &str) -> Option<&StationRecord> {
        self.stations
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Intermediate stops for a train, between but not including its
    /// endpoints. Curated per corridor where available; otherwise a
    /// distance-based synthetic list.
    pub fn intermediate_stops(&self, train: &TrainSchedule) -> Vec<String> {
        let key = (train.source.clone(), train.destination.clone());
        if let Some(stops) = self.curated_stops.get(&key) {
            return stops.clone();
        }

        let count = ((train.distance_km / KM_PER_SYNTHETIC_STOP) as usize)
            .max(MIN_SYNTHETIC_STOPS);
        (1..=count).map(|i| format!("Station {}", i)).collect()
    }
}

fn normalize_train(raw: RawTrain) -> Result<TrainSchedule, CatalogError> {
    let departure_time = raw
        .departure_time
        .parse()
        .map_err(|e: ClockTimeError| CatalogError::BadTrain {
            id: raw.id.clone(),
            detail: e.to_string(),
        })?;
    let arrival_time = raw
        .arrival_time
        .parse()
        .map_err(|e: ClockTimeError| CatalogError::BadTrain {
            id: raw.id.clone(),
            detail: e.to_string(),
        })?;
    let duration_minutes = parse_duration(&raw.duration).map_err(|e: DurationParseError| {
        CatalogError::BadTrain {
            id: raw.id.clone(),
            detail: e.to_string(),
        }
    })?;
    let status = raw.status.parse().map_err(|_| CatalogError::BadTrain {
        id: raw.id.clone(),
        detail: format!("unknown status {:?}", raw.status),
    })?;
    let frequency = raw.frequency.parse().map_err(|_| CatalogError::BadTrain {
        id: raw.id.clone(),
        detail: format!("unknown frequency {:?}", raw.frequency),
    })?;
    let fare = raw.fare.normalize().map_err(|e: FareError| {
        CatalogError::BadTrain {
            id: raw.id.clone(),
            detail: e.to_string(),
        }
    })?;

    Ok(TrainSchedule {
        id: raw.id,
        name: raw.name,
        number: raw.number,
        source: raw.source,
        destination: raw.destination,
        departure_time,
        arrival_time,
        duration_minutes,
        distance_km: raw.distance,
        fare,
        amenities: raw.amenities,
        status,
        category: raw.category,
        frequency,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Dataset is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Train {id} has invalid data: {detail}")]
    BadTrain { id: String, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::{FareClass, FareTable};

    #[test]
    fn test_embedded_dataset_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.trains().len(), 18);
        assert_eq!(catalog.stations().len(), 60);
    }

    #[test]
    fn test_train_lookup_and_normalization() {
        let catalog = Catalog::load().unwrap();
        let udarata = catalog.train_by_id("1").unwrap();
        assert_eq!(udarata.name, "Udarata Menike");
        assert_eq!(udarata.duration_minutes, 515);
        assert_eq!(udarata.journey_minutes(), 515);
        assert_eq!(udarata.fare.base_fare(FareClass::SecondClass), 1100.0);
        assert!(matches!(udarata.fare, FareTable::PerClass { .. }));
    }

    #[test]
    fn test_station_lookup_is_case_insensitive() {
        let catalog = Catalog::load().unwrap();
        let kandy = catalog.station_by_name("kandy").unwrap();
        assert_eq!(kandy.code, "KDY");
    }

    #[test]
    fn test_curated_stops_for_main_line() {
        let catalog = Catalog::load().unwrap();
        let intercity = catalog.train_by_id("17").unwrap();
        let stops = catalog.intermediate_stops(intercity);
        assert_eq!(stops.first().map(String::as_str), Some("Maradana"));
        assert_eq!(stops.last().map(String::as_str), Some("Peradeniya"));
    }

    #[test]
    fn test_synthetic_stops_for_uncurated_route() {
        let catalog = Catalog::load().unwrap();
        let yal_devi = catalog.train_by_id("4").unwrap();
        let stops = catalog.intermediate_stops(yal_devi);
        // 398 km at one stop per ~30 km
        assert_eq!(stops.len(), 13);
        assert_eq!(stops[0], "Station 1");
    }

    #[test]
    fn test_overnight_trains_flagged() {
        let catalog = Catalog::load().unwrap();
        let night_mail = catalog.train_by_id("16").unwrap();
        assert!(night_mail.is_overnight());
        assert_eq!(night_mail.journey_minutes(), 615);
    }
}
