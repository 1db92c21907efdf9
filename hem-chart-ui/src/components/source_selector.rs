//! Production source selector buttons.

use crate::locale::browser_locale;
use crate::state::AppState;
use dioxus::prelude::*;
use hem_core::interval::ProductionSource;
use hem_core::labels::source_button_label;

/// One button per production source; the active one is disabled.
#[component]
pub fn SourceSelector() -> Element {
    let state = use_context::<AppState>();
    let locale = browser_locale();
    let current = (state.source)();

    rsx! {
        div {
            style: "display: flex; gap: 8px; justify-content: center; margin: 8px 0;",
            for source in ProductionSource::all() {
                button {
                    style: "padding: 6px 12px;",
                    disabled: source == current,
                    onclick: {
                        let mut state = state;
                        move |_| state.source.set(source)
                    },
                    {source_button_label(source, locale)}
                }
            }
        }
    }
}
