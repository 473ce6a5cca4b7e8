pub mod locate;
pub mod position;
pub mod timetable;
pub mod tracker;

pub use locate::{locate, locate_at, locate_strict, progress_between, PositionError, Segment};
pub use position::JourneyPosition;
pub use timetable::{Route, RouteError, RouteStation};
pub use tracker::{JourneyTracker, TrackerError};
