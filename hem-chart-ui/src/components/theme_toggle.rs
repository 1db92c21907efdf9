//! Dark mode toggle, persisted in localStorage.

use crate::js_bridge::apply_theme;
use crate::prefs::store_dark_mode;
use crate::state::AppState;
use dioxus::prelude::*;

/// Checkbox toggling the document-wide dark theme.
#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let dark = (state.dark_mode)();

    rsx! {
        label {
            style: "display: flex; gap: 8px; align-items: center; font-size: 14px;",
            input {
                r#type: "checkbox",
                checked: dark,
                onchange: move |evt: Event<FormData>| {
                    let enabled = evt.checked();
                    state.dark_mode.set(enabled);
                    store_dark_mode(enabled);
                    apply_theme(enabled);
                },
            }
            "Dark mode"
        }
    }
}
