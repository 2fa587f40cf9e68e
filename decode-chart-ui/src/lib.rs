//! Shared Dioxus components and the map/chart JS bridge for the dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand Kepler payloads and Vega-Lite specs to the page
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (indicator checkboxes, panels, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
