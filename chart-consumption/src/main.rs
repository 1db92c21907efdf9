//! Electricity consumption screen.
//!
//! Shows one calendar window of consumption as D3.js columns with the
//! per-bucket temperature series drawn over them as a line, plus window
//! paging, a time-bucket selector and a summary panel (total and average
//! consumption and the current average indoor temperature).
//!
//! Data flow:
//! 1. On mount: initialize the D3 scripts and fetch the latest temperature
//!    snapshot for the summary panel.
//! 2. Whenever interval, reference date or the refresh tick change: fetch
//!    the consumption and temperature series for that window, guarded by a
//!    fetch ticket so a slow response cannot clobber a newer one.
//! 3. Whenever the series change: format labels for the browser locale and
//!    re-render the combo chart.

use dioxus::prelude::*;
use hem_chart_ui::chart_data::{overlay_values_json, series_points_json};
use hem_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, IntervalSelector, LoadingSpinner, SummaryPanel,
    SummaryRow, WindowNav,
};
use hem_chart_ui::js_bridge;
use hem_chart_ui::locale::browser_locale;
use hem_chart_ui::state::{apply_series_result, AppState};
use hem_core::client::EnergyApi;
use hem_core::fetch::select_fetch_op;
use hem_core::labels::format_labels;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "consumption-chart";

const DEFAULT_API_URL: &str = "http://localhost:8000";

fn api_url() -> &'static str {
    option_env!("HEM_API_URL").unwrap_or(DEFAULT_API_URL)
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("consumption-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let locale = browser_locale();

    // ─── Effect 1: one-time setup on mount ───
    use_effect(move || {
        js_bridge::init_charts();

        // Latest temperatures for the summary panel; errors here only log,
        // the consumption chart does not depend on them.
        spawn(async move {
            let api = EnergyApi::new(api_url());
            match api.temperatures().await {
                Ok(snapshot) => state.temperatures.set(snapshot),
                Err(err) => log::warn!("temperature fetch failed: {err}"),
            }
        });
    });

    // ─── Effect 2: fetch consumption + overlay for the current window ───
    // Post-await signal access goes through peek(): reads inside this
    // effect must not subscribe to the signals its own task writes.
    use_effect(move || {
        let interval = (state.interval)();
        let date = (state.reference_date)();
        let _ = (state.refresh_tick)();

        let ticket = state.begin_fetch();
        spawn(async move {
            let api = EnergyApi::new(api_url());
            let request = select_fetch_op(None, interval, date);
            let result = api.execute(request).await.map_err(|e| e.to_string());

            // The overlay is decoration: a failed temperature fetch logs
            // and leaves the columns standing alone.
            let overlay = match api.temperature_series(interval, date).await {
                Ok(series) => Some(series),
                Err(err) => {
                    log::warn!("temperature series fetch failed: {err}");
                    None
                }
            };

            let latest = *state.request_seq.peek();
            let mut series = state.series.peek().clone();
            let mut error = state.error_msg.peek().clone();
            if apply_series_result(ticket, latest, result, &mut series, &mut error) {
                state.series.set(series);
                state.error_msg.set(error);
                if let Some(overlay) = overlay {
                    state.temperature_overlay.set(overlay);
                }
                state.loading.set(false);
            }
        });
    });

    // ─── Effect 3: render the chart whenever the series change ───
    use_effect(move || {
        let series = (state.series)();
        let overlay = (state.temperature_overlay)();
        if (state.loading)() || series.is_empty() {
            return;
        }

        let labels = format_labels(&series, locale);
        let data_json = series_points_json(&series, &labels);
        let overlay_json = overlay_values_json(&overlay);
        let config_json = serde_json::json!({
            "title": "",
            "yLabel": "kWh",
            "color": "#4e79a7",
            "overlayColor": "#e15759",
            "overlayLabel": "°C",
        })
        .to_string();

        js_bridge::render_combo_chart(CHART_CONTAINER_ID, &data_json, &overlay_json, &config_json);
    });

    let series = (state.series)();
    let temperatures = (state.temperatures)();
    let mut rows = vec![
        SummaryRow::new("Total", format!("{:.1} kWh", series.sum())),
        SummaryRow::new(
            "Average",
            match series.mean() {
                Some(mean) => format!("{mean:.1} kWh"),
                None => "-".to_string(),
            },
        ),
    ];
    if let Some(mean_temp) = temperatures.mean() {
        rows.push(SummaryRow::new("Indoor", format!("{mean_temp:.1} °C")));
    }

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Electricity consumption".to_string(),
                unit_description: "kWh".to_string(),
            }

            WindowNav {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                SummaryPanel { rows }

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    loading: *state.loading.read(),
                }
            }

            IntervalSelector {}
        }
    }
}
