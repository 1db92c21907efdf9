//! Calendar window navigation: back/forward arrows around the window heading.

use crate::locale::browser_locale;
use crate::state::AppState;
use dioxus::prelude::*;
use hem_core::interval::StepDirection;
use hem_core::labels::window_label;

/// Paging arrows with the current window heading between them.
#[component]
pub fn WindowNav() -> Element {
    let mut state = use_context::<AppState>();
    let locale = browser_locale();
    let heading = window_label((state.interval)(), (state.reference_date)(), locale);

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; justify-content: center; margin: 8px 0;",
            button {
                style: "padding: 4px 12px; font-size: 16px;",
                onclick: move |_| state.step_window(StepDirection::Back),
                "<"
            }
            span {
                style: "font-weight: bold; min-width: 160px; text-align: center;",
                "{heading}"
            }
            button {
                style: "padding: 4px 12px; font-size: 16px;",
                onclick: move |_| state.step_window(StepDirection::Forward),
                ">"
            }
        }
    }
}
