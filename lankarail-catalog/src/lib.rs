pub mod dataset;
pub mod fare;
pub mod schedule;
pub mod search;

pub use dataset::{Catalog, CatalogError};
pub use fare::{FareCalculator, FareClass, FareError, FareTable, RawFare};
pub use schedule::{Frequency, StationRecord, TrainSchedule, TrainStatus};
pub use search::SearchQuery;
