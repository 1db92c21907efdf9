//! Browser language detection.

use hem_core::labels::ChartLocale;

/// Read the browser's preferred language and map it to a display locale.
#[cfg(target_arch = "wasm32")]
pub fn browser_locale() -> ChartLocale {
    let tag = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_default();
    ChartLocale::detect(&tag)
}

/// English fallback where no browser is available (native tests, tooling).
#[cfg(not(target_arch = "wasm32"))]
pub fn browser_locale() -> ChartLocale {
    ChartLocale::English
}
