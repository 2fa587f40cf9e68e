//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod indicator_panel;
mod indicator_selector;
mod loading_spinner;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use indicator_panel::IndicatorPanelView;
pub use indicator_selector::IndicatorSelector;
pub use loading_spinner::LoadingSpinner;
