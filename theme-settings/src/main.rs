//! Appearance settings screen.
//!
//! A single dark-mode toggle persisted in localStorage, with a small swatch
//! preview of the active palette.

use dioxus::prelude::*;
use hem_chart_ui::components::ThemeToggle;
use hem_chart_ui::js_bridge;
use hem_chart_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("settings-root"))
        .launch(App);
}

const SWATCHES_LIGHT: [&str; 3] = ["#ffffff", "#4e79a7", "#59a14f"];
const SWATCHES_DARK: [&str; 3] = ["#1e1e1e", "#7aa7d4", "#86c97e"];

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Apply the stored preference when the screen opens.
    use_effect(move || {
        js_bridge::apply_theme((state.dark_mode)());
    });

    let swatches = if (state.dark_mode)() {
        SWATCHES_DARK
    } else {
        SWATCHES_LIGHT
    };

    rsx! {
        div {
            style: "max-width: 480px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h3 { style: "margin: 0 0 12px 0; font-size: 16px;", "Appearance" }

            ThemeToggle {}

            div {
                style: "display: flex; gap: 8px; margin-top: 16px;",
                for color in swatches {
                    div {
                        style: "width: 40px; height: 40px; border-radius: 4px; border: 1px solid #ccc; background: {color};",
                    }
                }
            }
        }
    }
}
