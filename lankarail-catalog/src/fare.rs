use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Multipliers applied to a flat legacy fare to derive per-class prices.
/// Policy constants, not derived from any fare data.
const FIRST_CLASS_MULTIPLIER: f64 = 1.5;
const SECOND_CLASS_MULTIPLIER: f64 = 1.0;
const THIRD_CLASS_MULTIPLIER: f64 = 0.8;

/// The three fare tiers sold on Sri Lankan trains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FareClass {
    FirstClass,
    SecondClass,
    ThirdClass,
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FareClass::FirstClass => "1st Class",
            FareClass::SecondClass => "2nd Class",
            FareClass::ThirdClass => "3rd Class",
        };
        f.write_str(label)
    }
}

impl FromStr for FareClass {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accepts both the stored key form and the short UI form.
        match s {
            "firstClass" | "1st" | "first" => Ok(FareClass::FirstClass),
            "secondClass" | "2nd" | "second" => Ok(FareClass::SecondClass),
            "thirdClass" | "3rd" | "third" => Ok(FareClass::ThirdClass),
            other => Err(FareError::UnknownClass(other.to_string())),
        }
    }
}

/// Fare value as it appears in raw data. Older records carried a bare
/// amount or a pre-formatted string; current records carry per-class
/// amounts. Normalized exactly once at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawFare {
    PerClass {
        #[serde(rename = "firstClass")]
        first_class: f64,
        #[serde(rename = "secondClass")]
        second_class: f64,
        #[serde(rename = "thirdClass")]
        third_class: f64,
    },
    Flat(f64),
    Text(String),
}

impl RawFare {
    pub fn normalize(&self) -> Result<FareTable, FareError> {
        match self {
            RawFare::PerClass {
                first_class,
                second_class,
                third_class,
            } => Ok(FareTable::PerClass {
                first_class: *first_class,
                second_class: *second_class,
                third_class: *third_class,
            }),
            RawFare::Flat(amount) => Ok(FareTable::Flat { base: *amount }),
            RawFare::Text(text) => {
                let digits: String = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                let base: f64 = digits
                    .parse()
                    .map_err(|_| FareError::UnparsableFare(text.clone()))?;
                Ok(FareTable::Flat { base })
            }
        }
    }
}

/// Normalized fare data for a train. Amounts are LKR.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FareTable {
    PerClass {
        first_class: f64,
        second_class: f64,
        third_class: f64,
    },
    /// Legacy flat fare; per-class prices come from the fixed multipliers.
    Flat { base: f64 },
}

impl FareTable {
    /// Base ticket price for one passenger in the given class.
    pub fn base_fare(&self, class: FareClass) -> f64 {
        match self {
            FareTable::PerClass {
                first_class,
                second_class,
                third_class,
            } => match class {
                FareClass::FirstClass => *first_class,
                FareClass::SecondClass => *second_class,
                FareClass::ThirdClass => *third_class,
            },
            FareTable::Flat { base } => match class {
                FareClass::FirstClass => base * FIRST_CLASS_MULTIPLIER,
                FareClass::SecondClass => base * SECOND_CLASS_MULTIPLIER,
                FareClass::ThirdClass => base * THIRD_CLASS_MULTIPLIER,
            },
        }
    }
}

/// Computes ticket totals from a fare table plus the booking fee schedule.
#[derive(Debug, Clone)]
pub struct FareCalculator {
    service_fee: f64,
    tax: f64,
}

impl FareCalculator {
    pub fn new(service_fee: f64, tax: f64) -> Self {
        Self { service_fee, tax }
    }

    /// Total price for a party: `(base + service_fee + tax) * passengers`.
    pub fn compute_total(&self, fare: &FareTable, class: FareClass, passengers: u32) -> f64 {
        let base = fare.base_fare(class);
        (base + self.service_fee + self.tax) * passengers as f64
    }

    pub fn service_fee(&self) -> f64 {
        self.service_fee
    }

    pub fn tax(&self) -> f64 {
        self.tax
    }
}

impl Default for FareCalculator {
    fn default() -> Self {
        // Fee schedule carried over from the production fare screen.
        Self::new(100.0, 50.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FareError {
    #[error("Unknown fare class: {0}")]
    UnknownClass(String),

    #[error("Fare amount could not be parsed: {0:?}")]
    UnparsableFare(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_class() -> FareTable {
        FareTable::PerClass {
            first_class: 2200.0,
            second_class: 1100.0,
            third_class: 550.0,
        }
    }

    #[test]
    fn test_per_class_total() {
        let calc = FareCalculator::new(100.0, 50.0);
        let total = calc.compute_total(&per_class(), FareClass::SecondClass, 2);
        assert_eq!(total, 2500.0);
    }

    #[test]
    fn test_flat_fare_multipliers() {
        let flat = FareTable::Flat { base: 1000.0 };
        assert_eq!(flat.base_fare(FareClass::FirstClass), 1500.0);
        assert_eq!(flat.base_fare(FareClass::SecondClass), 1000.0);
        assert_eq!(flat.base_fare(FareClass::ThirdClass), 800.0);
    }

    #[test]
    fn test_total_is_linear_in_passengers() {
        let calc = FareCalculator::default();
        let one = calc.compute_total(&per_class(), FareClass::ThirdClass, 1);
        for k in 1..=5 {
            let many = calc.compute_total(&per_class(), FareClass::ThirdClass, k);
            assert_eq!(many, one * k as f64);
        }
    }

    #[test]
    fn test_normalize_legacy_text_fare() {
        let raw = RawFare::Text("Rs 1,250".to_string());
        assert_eq!(raw.normalize().unwrap(), FareTable::Flat { base: 1250.0 });
    }

    #[test]
    fn test_normalize_rejects_gibberish() {
        let raw = RawFare::Text("call the station".to_string());
        assert!(matches!(
            raw.normalize(),
            Err(FareError::UnparsableFare(_))
        ));
    }

    #[test]
    fn test_class_parsing() {
        assert_eq!("secondClass".parse::<FareClass>().unwrap(), FareClass::SecondClass);
        assert_eq!("1st".parse::<FareClass>().unwrap(), FareClass::FirstClass);
        assert!(matches!(
            "sleeper".parse::<FareClass>(),
            Err(FareError::UnknownClass(_))
        ));
    }

    #[test]
    fn test_raw_shapes_deserialize() {
        let per: RawFare =
            serde_json::from_str(r#"{"firstClass": 2200, "secondClass": 1100, "thirdClass": 550}"#)
                .unwrap();
        assert!(matches!(per, RawFare::PerClass { .. }));

        let flat: RawFare = serde_json::from_str("750").unwrap();
        assert!(matches!(flat, RawFare::Flat(_)));

        let text: RawFare = serde_json::from_str(r#""Rs 750""#).unwrap();
        assert!(matches!(text, RawFare::Text(_)));
    }
}
