//! Electricity production screen.
//!
//! Same window/bucket navigation as the consumption screen, plus a
//! production-source selector (solar, wind, total) and an explicit refresh
//! button. The source selector changes which backend series is fetched
//! without re-anchoring the window.

use dioxus::prelude::*;
use hem_chart_ui::chart_data::series_points_json;
use hem_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, IntervalSelector, LoadingSpinner, RefreshButton,
    SourceSelector, SummaryPanel, SummaryRow, WindowNav,
};
use hem_chart_ui::js_bridge;
use hem_chart_ui::locale::browser_locale;
use hem_chart_ui::state::{apply_series_result, AppState};
use hem_core::client::EnergyApi;
use hem_core::fetch::select_fetch_op;
use hem_core::labels::format_labels;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "production-chart";

const DEFAULT_API_URL: &str = "http://localhost:8000";

fn api_url() -> &'static str {
    option_env!("HEM_API_URL").unwrap_or(DEFAULT_API_URL)
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("production-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let locale = browser_locale();

    // ─── Effect 1: one-time setup on mount ───
    use_effect(move || {
        js_bridge::init_charts();
    });

    // ─── Effect 2: fetch the production series for the current selection ───
    // Post-await signal access goes through peek(): reads inside this
    // effect must not subscribe to the signals its own task writes.
    use_effect(move || {
        let interval = (state.interval)();
        let date = (state.reference_date)();
        let source = (state.source)();
        let _ = (state.refresh_tick)();

        let ticket = state.begin_fetch();
        spawn(async move {
            let api = EnergyApi::new(api_url());
            let request = select_fetch_op(Some(source), interval, date);
            let result = api.execute(request).await.map_err(|e| e.to_string());

            let latest = *state.request_seq.peek();
            let mut series = state.series.peek().clone();
            let mut error = state.error_msg.peek().clone();
            if apply_series_result(ticket, latest, result, &mut series, &mut error) {
                state.series.set(series);
                state.error_msg.set(error);
                state.loading.set(false);
            }
        });
    });

    // ─── Effect 3: render the chart whenever the series changes ───
    use_effect(move || {
        let series = (state.series)();
        if (state.loading)() || series.is_empty() {
            return;
        }

        let labels = format_labels(&series, locale);
        let data_json = series_points_json(&series, &labels);
        let config_json = serde_json::json!({
            "title": "",
            "yLabel": "kWh",
            "color": "#59a14f",
        })
        .to_string();

        js_bridge::render_column_chart(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    let series = (state.series)();
    let rows = vec![
        SummaryRow::new("Total", format!("{:.1} kWh", series.sum())),
        SummaryRow::new(
            "Average",
            match series.mean() {
                Some(mean) => format!("{mean:.1} kWh"),
                None => "-".to_string(),
            },
        ),
    ];

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                ChartHeader {
                    title: "Electricity production".to_string(),
                    unit_description: "kWh".to_string(),
                }
                RefreshButton {}
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

            SourceSelector {}
            IntervalSelector {}
        }
    }
}
