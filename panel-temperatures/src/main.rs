//! Temperature panel.
//!
//! Lists the most recent reading of every sensor as a table, with a
//! locale-formatted "last updated" stamp and an explicit refresh button.
//! No calendar window: this screen always shows the latest snapshot.

use chrono::Local;
use dioxus::prelude::*;
use hem_chart_ui::components::{ErrorDisplay, LoadingSpinner, RefreshButton};
use hem_chart_ui::locale::browser_locale;
use hem_chart_ui::state::AppState;
use hem_core::client::EnergyApi;
use hem_core::labels::format_fetch_timestamp;

const DEFAULT_API_URL: &str = "http://localhost:8000";

fn api_url() -> &'static str {
    option_env!("HEM_API_URL").unwrap_or(DEFAULT_API_URL)
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperatures-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let locale = browser_locale();

    // Fetch on mount and on every refresh click.
    use_effect(move || {
        let _ = (state.refresh_tick)();

        state.loading.set(true);
        spawn(async move {
            let api = EnergyApi::new(api_url());
            match api.temperatures().await {
                Ok(snapshot) => {
                    state.temperatures.set(snapshot);
                    state.error_msg.set(None);
                    let stamp = format_fetch_timestamp(Local::now().naive_local(), locale);
                    state.last_fetch_time.set(Some(stamp));
                }
                Err(err) => state.error_msg.set(Some(err.to_string())),
            }
            state.loading.set(false);
        });
    });

    let snapshot = (state.temperatures)();
    let rows: Vec<(String, String)> = snapshot
        .iter()
        .map(|(sensor, reading)| {
            let display = match reading {
                Some(celsius) => format!("{celsius:.1} °C"),
                None => "-".to_string(),
            };
            (sensor.to_string(), display)
        })
        .collect();

    rsx! {
        div {
            style: "max-width: 480px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; font-size: 16px;", "Temperatures" }
                RefreshButton {}
            }

            if let Some(stamp) = state.last_fetch_time.read().as_ref() {
                p {
                    style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "{stamp}"
                }
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                table {
                    style: "width: 100%; border-collapse: collapse; margin-top: 8px;",
                    tbody {
                        for (sensor, display) in rows {
                            tr {
                                style: "border-bottom: 1px solid #e0e0e0;",
                                td { style: "padding: 6px 4px;", "{sensor}" }
                                td {
                                    style: "padding: 6px 4px; text-align: right; font-weight: bold;",
                                    "{display}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
