use crate::timetable::{Route, RouteStation};
use lankarail_core::{ClockTime, MINUTES_PER_DAY};

/// The pair of stations bounding a train's current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'r> {
    /// Index of the segment's first station within the route.
    pub index: usize,
    pub last: &'r RouteStation,
    pub next: &'r RouteStation,
}

impl<'r> Segment<'r> {
    /// Clock at which the train left the segment's first station.
    pub fn last_time(&self) -> ClockTime {
        self.last.departure_time
    }

    /// Clock at which the train reaches the segment's second station.
    pub fn next_time(&self) -> ClockTime {
        self.next.arrival_time
    }
}

/// Map a journey progress percentage onto the route segment containing it.
///
/// Segments are assumed equally wide (the same simplification the timetable
/// builder makes). Progress at or below 0 pins to the first segment, at or
/// above 100 to the last. Pure and deterministic: identical inputs always
/// produce identical segments.
pub fn locate(route: &Route, progress_percent: f64) -> Segment<'_> {
    let stations = route.stations();
    let n = stations.len();

    let index = if progress_percent <= 0.0 {
        0
    } else if progress_percent >= 100.0 {
        n - 2
    } else {
        let segment_width = 100.0 / (n - 1) as f64;
        ((progress_percent / segment_width) as usize).min(n - 2)
    };

    Segment {
        index,
        last: &stations[index],
        next: &stations[index + 1],
    }
}

/// Like [`locate`], but rejects progress outside `[0, 100]` instead of
/// clamping.
pub fn locate_strict(route: &Route, progress_percent: f64) -> Result<Segment<'_>, PositionError> {
    if !(0.0..=100.0).contains(&progress_percent) {
        return Err(PositionError::OutOfRange(progress_percent));
    }
    Ok(locate(route, progress_percent))
}

/// Journey progress implied by a wall clock, as a percentage in `[0, 100]`.
///
/// Elapsed time is `(now - departure) mod 1440`, so a clock outside the
/// journey window reads as more than the total and clamps to 100.
pub fn progress_between(now: ClockTime, departure: ClockTime, arrival: ClockTime) -> f64 {
    let diff = departure.minutes_until(arrival);
    let total = if diff == 0 { MINUTES_PER_DAY } else { diff };
    let elapsed = departure.minutes_until(now);
    (elapsed as f64 / total as f64 * 100.0).min(100.0)
}

/// Locate a train from the current clock and its scheduled endpoints.
pub fn locate_at<'r>(
    route: &'r Route,
    now: ClockTime,
    departure: ClockTime,
    arrival: ClockTime,
) -> (Segment<'r>, f64) {
    let progress = progress_between(now, departure, arrival);
    (locate(route, progress), progress)
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PositionError {
    #[error("Progress {0} is outside 0..=100")]
    OutOfRange(f64),
}
