use crate::locate::locate_at;
use crate::position::JourneyPosition;
use crate::timetable::{Route, RouteError};
use chrono::{DateTime, Utc};
use lankarail_catalog::{Catalog, TrainSchedule};
use lankarail_core::{ClockTime, MINUTES_PER_DAY};
use std::collections::HashMap;

/// Derives live train positions from the static timetable.
///
/// Routes are built once per train at construction; positions are a pure
/// function of (route, clock) and are recomputed on every refresh, so the
/// tracker holds no cumulative state. The clock is always injected, which
/// keeps refreshes reproducible and testable. Consumers poll; there is no
/// push channel.
pub struct JourneyTracker {
    routes: HashMap<String, Route>,
    positions: HashMap<String, JourneyPosition>,
}

impl JourneyTracker {
    /// Build per-train routes from the catalog's schedules and stop lists.
    pub fn new(catalog: &Catalog) -> Result<Self, TrackerError> {
        let mut routes = HashMap::new();
        for train in catalog.trains() {
            let mut names = Vec::with_capacity(2);
            names.push(train.source.clone());
            names.extend(catalog.intermediate_stops(train));
            names.push(train.destination.clone());

            let route = Route::build(
                train.departure_time,
                train.arrival_time,
                &names,
                train.distance_km,
            )
            .map_err(|source| TrackerError::BadRoute {
                train_id: train.id.clone(),
                source,
            })?;
            routes.insert(train.id.clone(), route);
        }

        Ok(Self {
            routes,
            positions: HashMap::new(),
        })
    }

    pub fn route_for(&self, train_id: &str) -> Option<&Route> {
        self.routes.get(train_id)
    }

    /// Position snapshot from the last refresh, if the train was active then.
    pub fn position_of(&self, train_id: &str) -> Option<&JourneyPosition> {
        self.positions.get(train_id)
    }

    pub fn active_positions(&self) -> Vec<&JourneyPosition> {
        self.positions.values().collect()
    }

    /// Compute one train's position at the given instant, independent of the
    /// refresh cache. Returns `Ok(None)` when the train is not running.
    pub fn position_at(
        &self,
        train: &TrainSchedule,
        now: DateTime<Utc>,
    ) -> Result<Option<JourneyPosition>, TrackerError> {
        let route = self
            .routes
            .get(&train.id)
            .ok_or_else(|| TrackerError::UnknownTrain(train.id.clone()))?;

        let now_clock = ClockTime::from_datetime(&now);
        if !is_running(now_clock, train.departure_time, train.arrival_time) {
            return Ok(None);
        }

        let (segment, progress) = locate_at(
            route,
            now_clock,
            train.departure_time,
            train.arrival_time,
        );

        Ok(Some(JourneyPosition {
            train_id: train.id.clone(),
            train_number: train.number.clone(),
            last_station: segment.last.name.clone(),
            next_station: segment.next.name.clone(),
            last_station_time: segment.last_time(),
            next_station_time: segment.next_time(),
            progress_percent: progress,
            status: train.status,
            route_stations: route.station_names(),
            updated_at: now,
        }))
    }

    /// Recompute positions for every schedule, dropping trains whose run has
    /// finished. Returns the number of active trains.
    pub fn refresh(&mut self, catalog: &Catalog, now: DateTime<Utc>) -> usize {
        let mut active = HashMap::new();

        for train in catalog.trains() {
            match self.position_at(train, now) {
                Ok(Some(position)) => {
                    tracing::debug!(
                        train = %train.number,
                        progress = position.progress_percent,
                        next = %position.next_station,
                        "train position updated"
                    );
                    active.insert(train.id.clone(), position);
                }
                Ok(None) => {}
                Err(err) => {
                    // A train missing its route is a data defect, not a
                    // reason to drop the whole refresh.
                    tracing::warn!(train = %train.id, error = %err, "skipping train");
                }
            }
        }

        self.positions = active;
        self.positions.len()
    }
}

/// Whether `now` falls inside the departure→arrival window, reading the
/// arrival as the first occurrence of that clock after departure.
fn is_running(now: ClockTime, departure: ClockTime, arrival: ClockTime) -> bool {
    let diff = departure.minutes_until(arrival);
    let total = if diff == 0 { MINUTES_PER_DAY } else { diff };
    departure.minutes_until(now) <= total
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("No route built for train {0}")]
    UnknownTrain(String),

    #[error("Train {train_id} has an unbuildable route: {source}")]
    BadRoute {
        train_id: String,
        source: RouteError,
    },
}
