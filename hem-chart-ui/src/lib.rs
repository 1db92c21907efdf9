//! Shared Dioxus components and D3.js bridge for the energy monitor screens.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, nav, panels)
//! - `locale`: browser language detection
//! - `prefs`: dark-mode preference persisted in localStorage

pub mod chart_data;
pub mod components;
pub mod js_bridge;
pub mod locale;
pub mod prefs;
pub mod state;
