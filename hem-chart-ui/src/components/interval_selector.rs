//! Time bucket selector buttons.

use crate::locale::browser_locale;
use crate::state::AppState;
use dioxus::prelude::*;
use hem_core::interval::TimeInterval;
use hem_core::labels::interval_button_label;

/// One button per time bucket; the active one is disabled.
///
/// Selecting a bucket re-anchors the window on today.
#[component]
pub fn IntervalSelector() -> Element {
    let state = use_context::<AppState>();
    let locale = browser_locale();
    let current = (state.interval)();

    rsx! {
        div {
            style: "display: flex; gap: 8px; justify-content: center; margin: 8px 0;",
            for interval in TimeInterval::all() {
                button {
                    style: "padding: 6px 12px;",
                    disabled: interval == current,
                    onclick: {
                        let mut state = state;
                        move |_| state.select_interval(interval)
                    },
                    {interval_button_label(interval, locale)}
                }
            }
        }
    }
}
