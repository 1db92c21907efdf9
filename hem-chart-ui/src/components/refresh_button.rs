//! Explicit refresh button.

use crate::state::AppState;
use dioxus::prelude::*;

/// Re-fetches the current screen's data on click.
#[component]
pub fn RefreshButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            style: "padding: 6px 12px;",
            onclick: move |_| state.request_refresh(),
            "⟳"
        }
    }
}
