//! Core domain logic for the home energy monitor: time buckets, calendar
//! windows, series shaping, locale-aware labels, and (behind the `api`
//! feature) the HTTP client for the energy backend.

pub mod fetch;
pub mod interval;
pub mod labels;
pub mod series;
pub mod window;

#[cfg(feature = "api")]
pub mod client;
#[cfg(feature = "api")]
pub mod error;
