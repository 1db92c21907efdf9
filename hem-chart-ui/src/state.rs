//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.
//!
//! Every fetch is tagged with a ticket drawn from `request_seq`; a completion
//! whose ticket no longer matches the latest sequence value is discarded, so
//! a slow response cannot overwrite state the user has already navigated away
//! from.

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use hem_core::interval::{ProductionSource, StepDirection, TimeInterval};
use hem_core::series::MetricSeries;
use hem_core::window;

/// Shared reactive state for one energy monitor screen.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether a fetch is outstanding
    pub loading: Signal<bool>,
    /// Error message of the most recent failed fetch
    pub error_msg: Signal<Option<String>>,
    /// Currently selected time bucket
    pub interval: Signal<TimeInterval>,
    /// Currently selected production source (production screen only)
    pub source: Signal<ProductionSource>,
    /// Anchor date of the visible calendar window
    pub reference_date: Signal<NaiveDate>,
    /// Last successfully fetched chart series
    pub series: Signal<MetricSeries>,
    /// Per-bucket temperature series drawn over the consumption columns
    pub temperature_overlay: Signal<MetricSeries>,
    /// Latest per-sensor temperature snapshot
    pub temperatures: Signal<MetricSeries>,
    /// When the temperature snapshot was fetched, already formatted
    pub last_fetch_time: Signal<Option<String>>,
    /// Monotonic fetch ticket; completions with an older ticket are stale
    pub request_seq: Signal<u64>,
    /// Bumped by the explicit refresh button to re-trigger fetch effects
    pub refresh_tick: Signal<u64>,
    /// Dark-mode preference, mirrored from localStorage
    pub dark_mode: Signal<bool>,
}

impl AppState {
    /// Create a new AppState anchored on today's window.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            interval: Signal::new(TimeInterval::Days),
            source: Signal::new(ProductionSource::Total),
            reference_date: Signal::new(window::initial_reference_date(
                TimeInterval::Days,
                today,
            )),
            series: Signal::new(MetricSeries::new()),
            temperature_overlay: Signal::new(MetricSeries::new()),
            temperatures: Signal::new(MetricSeries::new()),
            last_fetch_time: Signal::new(None),
            request_seq: Signal::new(0),
            refresh_tick: Signal::new(0),
            dark_mode: Signal::new(crate::prefs::load_dark_mode()),
        }
    }

    /// Begin a fetch: bump the sequence, mark the screen loading and return
    /// the ticket the completion must present.
    ///
    /// Reads the sequence with `peek()` so a fetch effect that calls this
    /// does not subscribe to `request_seq`; a tracked read here would let
    /// the effect's own write re-queue it and fetch in a loop.
    pub fn begin_fetch(&mut self) -> u64 {
        let ticket = *self.request_seq.peek() + 1;
        self.request_seq.set(ticket);
        self.loading.set(true);
        ticket
    }

    /// Switch the time bucket, re-anchoring the window on today.
    pub fn select_interval(&mut self, interval: TimeInterval) {
        let today = Local::now().date_naive();
        self.interval.set(interval);
        self.reference_date
            .set(window::initial_reference_date(interval, today));
    }

    /// Page the window one step back or forward.
    pub fn step_window(&mut self, direction: StepDirection) {
        let next = window::step((self.reference_date)(), (self.interval)(), direction);
        self.reference_date.set(next);
    }

    /// Explicit user-initiated refresh.
    pub fn request_refresh(&mut self) {
        let tick = (self.refresh_tick)() + 1;
        self.refresh_tick.set(tick);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a completed series fetch to the stored series and error slots.
///
/// Returns `false` when the completion was stale (`ticket` no longer matches
/// the latest sequence value) and nothing was touched. On failure the prior
/// series is retained and only the error slot is set, so a screen keeps
/// showing its last good data.
pub fn apply_series_result(
    ticket: u64,
    latest: u64,
    result: Result<MetricSeries, String>,
    series: &mut MetricSeries,
    error_msg: &mut Option<String>,
) -> bool {
    if ticket != latest {
        return false;
    }
    match result {
        Ok(fresh) => {
            *series = fresh;
            *error_msg = None;
        }
        Err(message) => {
            *error_msg = Some(message);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::ReactiveContext;

    #[test]
    fn test_begin_fetch_tickets_are_monotonic() {
        let mut dom = VirtualDom::new(|| {
            let mut state = use_context_provider(AppState::new);
            let first = state.begin_fetch();
            let second = state.begin_fetch();
            assert_eq!(second, first + 1);
            assert_eq!(*state.request_seq.peek(), second);
            assert!(*state.loading.peek());
            rsx! { div {} }
        });
        dom.rebuild_in_place();
    }

    #[test]
    fn test_begin_fetch_does_not_subscribe_to_the_sequence() {
        // A fetch effect calls begin_fetch and then writes request_seq. If
        // the read inside begin_fetch were tracked, that write would mark
        // the effect dirty and the screen would fetch in a loop.
        let mut dom = VirtualDom::new(|| {
            let mut state = use_context_provider(AppState::new);
            let (rc, mut changed) = ReactiveContext::new();
            rc.run_in(|| state.begin_fetch());
            state.request_seq.set(99);
            assert!(
                changed.try_next().is_err(),
                "begin_fetch subscribed to request_seq"
            );
            rsx! { div {} }
        });
        dom.rebuild_in_place();
    }

    fn sample_series() -> MetricSeries {
        MetricSeries::from_pairs(vec![
            ("2024-05-06".to_string(), Some(3.0)),
            ("2024-05-07".to_string(), Some(5.0)),
        ])
    }

    #[test]
    fn test_success_replaces_series_and_clears_error() {
        let mut series = MetricSeries::new();
        let mut error = Some("boom".to_string());
        let applied = apply_series_result(2, 2, Ok(sample_series()), &mut series, &mut error);
        assert!(applied);
        assert_eq!(series.len(), 2);
        assert_eq!(error, None);
    }

    #[test]
    fn test_failure_retains_prior_series() {
        let mut series = sample_series();
        let mut error = None;
        let applied = apply_series_result(
            3,
            3,
            Err("connection refused".to_string()),
            &mut series,
            &mut error,
        );
        assert!(applied);
        // stale-while-error: the last good data stays on screen
        assert_eq!(series, sample_series());
        assert_eq!(error, Some("connection refused".to_string()));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut series = sample_series();
        let mut error = None;
        let applied =
            apply_series_result(1, 2, Ok(MetricSeries::new()), &mut series, &mut error);
        assert!(!applied);
        assert_eq!(series, sample_series());
        assert_eq!(error, None);
    }
}
