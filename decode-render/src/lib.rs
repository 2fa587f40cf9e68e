//! Composition of selected indicators into renderable output.
//!
//! - `config`: the static Kepler visual configuration
//! - `map`: layer-id policies, the map layer collection and its Kepler payload
//! - `chart`: one Vega-Lite scatter chart per indicator
//! - `dashboard`: a full render pass from the current selection
//! - `report`: plain-text rendering of a render pass

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod map;
pub mod report;

pub use chart::{build_chart, ChartSpec};
pub use config::VisualConfig;
pub use dashboard::{Dashboard, IndicatorPanel, RenderPass};
pub use map::{build_map, ExplicitLayerIds, LayerIdPolicy, MapLayerCollection, NameAsLayerId};
