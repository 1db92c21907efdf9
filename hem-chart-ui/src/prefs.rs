//! User preferences persisted in the browser's localStorage.
//!
//! Off the wasm target (native tests, tooling) there is no browser, so the
//! store degrades to the defaults.

#[cfg(target_arch = "wasm32")]
use log::warn;

#[cfg(target_arch = "wasm32")]
const DARK_MODE_KEY: &str = "hem.dark_mode";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored dark-mode preference; defaults to light.
#[cfg(target_arch = "wasm32")]
pub fn load_dark_mode() -> bool {
    match local_storage().and_then(|s| s.get_item(DARK_MODE_KEY).ok().flatten()) {
        Some(value) => value == "true",
        None => false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dark_mode() -> bool {
    false
}

/// Persist the dark-mode preference.
#[cfg(target_arch = "wasm32")]
pub fn store_dark_mode(enabled: bool) {
    let Some(storage) = local_storage() else {
        return;
    };
    let value = if enabled { "true" } else { "false" };
    if storage.set_item(DARK_MODE_KEY, value).is_err() {
        warn!("could not persist dark mode preference");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_dark_mode(_enabled: bool) {}
