//! Time-bucket and production-source selectors shared by every screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The time bucket size for a displayed series.
///
/// Determines both the navigator step (see [`crate::window`]) and the series
/// shape requested from the backend.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TimeInterval {
    Hours,
    Days,
    Weeks,
    Months,
}

impl TimeInterval {
    /// URL path segment used by the backend for this interval.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            TimeInterval::Hours => "hourly",
            TimeInterval::Days => "daily",
            TimeInterval::Weeks => "weekly",
            TimeInterval::Months => "monthly",
        }
    }

    /// All intervals in the order the selector buttons present them.
    pub fn all() -> [TimeInterval; 4] {
        [
            TimeInterval::Months,
            TimeInterval::Weeks,
            TimeInterval::Days,
            TimeInterval::Hours,
        ]
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeInterval::Hours => "hours",
            TimeInterval::Days => "days",
            TimeInterval::Weeks => "weeks",
            TimeInterval::Months => "months",
        };
        write!(f, "{name}")
    }
}

impl FromStr for TimeInterval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hours" | "hourly" => Ok(TimeInterval::Hours),
            "days" | "daily" => Ok(TimeInterval::Days),
            "weeks" | "weekly" => Ok(TimeInterval::Weeks),
            "months" | "monthly" => Ok(TimeInterval::Months),
            other => Err(format!(
                "unknown interval '{other}' (expected hours, days, weeks or months)"
            )),
        }
    }
}

/// Which generation data the production screen displays.
///
/// Orthogonal to [`TimeInterval`]; changing one never resets the other.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ProductionSource {
    Solar,
    Wind,
    Total,
}

impl ProductionSource {
    /// URL path segment used by the backend for this source.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            ProductionSource::Solar => "solar",
            ProductionSource::Wind => "wind",
            ProductionSource::Total => "total",
        }
    }

    pub fn all() -> [ProductionSource; 3] {
        [
            ProductionSource::Solar,
            ProductionSource::Wind,
            ProductionSource::Total,
        ]
    }
}

impl fmt::Display for ProductionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

impl FromStr for ProductionSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solar" => Ok(ProductionSource::Solar),
            "wind" => Ok(ProductionSource::Wind),
            "total" => Ok(ProductionSource::Total),
            other => Err(format!(
                "unknown production source '{other}' (expected solar, wind or total)"
            )),
        }
    }
}

/// Paging direction for the calendar-window navigator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StepDirection {
    Back,
    Forward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_round_trips_through_str() {
        for interval in TimeInterval::all() {
            let parsed: TimeInterval = interval.to_string().parse().unwrap();
            assert_eq!(parsed, interval);
        }
    }

    #[test]
    fn test_interval_accepts_path_segment_spelling() {
        assert_eq!("hourly".parse::<TimeInterval>(), Ok(TimeInterval::Hours));
        assert_eq!("MONTHS".parse::<TimeInterval>(), Ok(TimeInterval::Months));
    }

    #[test]
    fn test_unknown_interval_is_rejected() {
        assert!("main".parse::<TimeInterval>().is_err());
    }

    #[test]
    fn test_source_round_trips_through_str() {
        for source in ProductionSource::all() {
            let parsed: ProductionSource = source.to_string().parse().unwrap();
            assert_eq!(parsed, source);
        }
    }
}
