pub mod clock;
pub mod duration;

pub use clock::{ClockTime, ClockTimeError, MINUTES_PER_DAY};
pub use duration::{format_duration, parse_duration, DurationParseError};
