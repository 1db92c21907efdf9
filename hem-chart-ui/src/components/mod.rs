//! Reusable Dioxus RSX components for the energy monitor screens.

mod chart_container;
mod chart_header;
mod error_display;
mod interval_selector;
mod loading_spinner;
mod refresh_button;
mod source_selector;
mod summary_panel;
mod theme_toggle;
mod window_nav;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use interval_selector::IntervalSelector;
pub use loading_spinner::LoadingSpinner;
pub use refresh_button::RefreshButton;
pub use source_selector::SourceSelector;
pub use summary_panel::{SummaryPanel, SummaryRow};
pub use theme_toggle::ThemeToggle;
pub use window_nav::WindowNav;
