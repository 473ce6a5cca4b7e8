use chrono::Timelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day in 24-hour "HH:MM" form, with no date attached.
///
/// Departure and arrival times in the timetable data are clock-only, so all
/// arithmetic here is modulo one day: an arrival clock that precedes the
/// departure clock means the journey crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ClockTimeError> {
        if hour >= 24 || minute >= 60 {
            return Err(ClockTimeError::OutOfRange { hour, minute });
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Build from minutes past midnight, wrapping past the end of the day.
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minutes: minutes % MINUTES_PER_DAY,
        }
    }

    /// The clock reading of a wall-clock instant.
    pub fn from_datetime<Tz: chrono::TimeZone>(at: &chrono::DateTime<Tz>) -> Self {
        Self {
            minutes: at.hour() * 60 + at.minute(),
        }
    }

    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.minutes
    }

    /// Advance by the given number of minutes, wrapping at midnight.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes + minutes)
    }

    /// Minutes from `self` forward to `other`, always in `0..1440`.
    ///
    /// `self.minutes_until(self)` is 0; callers that mean "a full day later"
    /// must handle that reading themselves.
    pub fn minutes_until(&self, other: ClockTime) -> u32 {
        (other.minutes + MINUTES_PER_DAY - self.minutes) % MINUTES_PER_DAY
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ClockTimeError::Malformed(s.to_string()))?;
        let hour: u32 = h
            .trim()
            .parse()
            .map_err(|_| ClockTimeError::Malformed(s.to_string()))?;
        let minute: u32 = m
            .trim()
            .parse()
            .map_err(|_| ClockTimeError::Malformed(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClockTimeError {
    #[error("Malformed clock time: {0:?} (expected HH:MM)")]
    Malformed(String),

    #[error("Clock time out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: u32, minute: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t: ClockTime = "05:55".parse().unwrap();
        assert_eq!(t.hour(), 5);
        assert_eq!(t.minute(), 55);
        assert_eq!(t.to_string(), "05:55");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
        assert!("12".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_minutes_until_same_day() {
        let dep: ClockTime = "05:55".parse().unwrap();
        let arr: ClockTime = "14:30".parse().unwrap();
        assert_eq!(dep.minutes_until(arr), 515);
    }

    #[test]
    fn test_minutes_until_overnight() {
        let dep: ClockTime = "20:00".parse().unwrap();
        let arr: ClockTime = "06:15".parse().unwrap();
        assert_eq!(dep.minutes_until(arr), 615);
    }

    #[test]
    fn test_minutes_until_identical_is_zero() {
        let t: ClockTime = "23:50".parse().unwrap();
        assert_eq!(t.minutes_until(t), 0);
    }

    #[test]
    fn test_plus_minutes_wraps_midnight() {
        let t: ClockTime = "23:50".parse().unwrap();
        assert_eq!(t.plus_minutes(20).to_string(), "00:10");
    }

    #[test]
    fn test_serde_round_trip() {
        let t: ClockTime = "09:05".parse().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"09:05\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
