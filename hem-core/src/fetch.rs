//! Fetch-request selection.
//!
//! Screens describe the one backend call they need as a [`FetchRequest`]
//! value instead of assembling refresh closures per selector combination.
//! The description is inert data, so it can be chosen synchronously from the
//! current selector state and executed wherever an API client is available.

use crate::interval::{ProductionSource, TimeInterval};
use chrono::NaiveDate;

/// Description of exactly one backend call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FetchRequest {
    Consumption {
        interval: TimeInterval,
        date: NaiveDate,
    },
    Production {
        source: ProductionSource,
        interval: TimeInterval,
        date: NaiveDate,
    },
    Temperatures,
}

/// Pick the single series call for the current selector state.
///
/// A screen without a production-source selector passes `None` and gets the
/// consumption series; the production screen passes its current source.
pub fn select_fetch_op(
    source: Option<ProductionSource>,
    interval: TimeInterval,
    date: NaiveDate,
) -> FetchRequest {
    match source {
        Some(source) => FetchRequest::Production {
            source,
            interval,
            date,
        },
        None => FetchRequest::Consumption { interval, date },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    }

    #[test]
    fn test_no_source_selects_consumption() {
        assert_eq!(
            select_fetch_op(None, TimeInterval::Days, monday()),
            FetchRequest::Consumption {
                interval: TimeInterval::Days,
                date: monday()
            }
        );
    }

    #[test]
    fn test_source_selects_production() {
        assert_eq!(
            select_fetch_op(Some(ProductionSource::Wind), TimeInterval::Months, monday()),
            FetchRequest::Production {
                source: ProductionSource::Wind,
                interval: TimeInterval::Months,
                date: monday()
            }
        );
    }
}
