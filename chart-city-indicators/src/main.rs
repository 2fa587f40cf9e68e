//! Insights on Economic Trends in Indian Cities
//!
//! Dashboard for the DeCODE (Deciphering City Outcomes through Data
//! Exploration) challenge: a sidebar of indicator checkboxes, a Kepler.gl map
//! of the selected indicators, a summary panel per indicator and one binned
//! scatter chart per indicator.
//!
//! Data flow:
//! 1. `build.rs` embeds the indicator CSVs, the Kepler config, the
//!    description table and the layer-id table.
//! 2. On mount the static tables are parsed once into a `Dashboard`.
//! 3. Every checkbox toggle writes the selection signal; the render effect
//!    rebuilds the whole pass (map, panels, charts) and hands the map payload
//!    and chart specs to the JS renderers.

use decode_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, IndicatorPanelView, IndicatorSelector,
    LoadingSpinner,
};
use decode_chart_ui::js_bridge;
use decode_chart_ui::state::AppState;
use decode_core::{Catalog, EmbeddedStore};
use decode_data::DescriptionTable;
use decode_render::report::{CHARTS_HEADING, NO_CHARTS};
use decode_render::{Dashboard, ExplicitLayerIds, VisualConfig};
use dioxus::prelude::*;
use std::rc::Rc;

/// Indicator CSVs as `(file name, contents)`.
static INDICATOR_FILES: &[(&str, &str)] = include!(concat!(env!("OUT_DIR"), "/indicators.rs"));
/// Saved Kepler.gl map configuration.
const KEPLER_CONFIG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/kepler.gl.json"));
/// Base indicator name -> definition/insight.
const DESCRIPTIONS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/descriptions.json"));
/// Indicator name -> Kepler dataId.
const LAYER_IDS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/layer_ids.json"));

/// Map container DOM element ID used by Kepler.gl to render into.
const MAP_ID: &str = "indicator-map";

fn chart_id(idx: usize) -> String {
    format!("indicator-chart-{}", idx)
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("city-indicators-root"))
        .launch(App);
}

fn load_dashboard() -> anyhow::Result<Dashboard> {
    let descriptions = DescriptionTable::from_json(DESCRIPTIONS_JSON)?;
    let layer_ids = ExplicitLayerIds::from_json(LAYER_IDS_JSON)?;
    let visual_config = VisualConfig::from_json(KEPLER_CONFIG_JSON)?;
    let catalog = Catalog::new(EmbeddedStore::new(INDICATOR_FILES));
    Ok(Dashboard::new(catalog, descriptions, layer_ids, visual_config))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the static tables once on mount
    use_effect(move || {
        let dashboard = match load_dashboard() {
            Ok(d) => d,
            Err(e) => {
                log::error!("Failed to load dashboard configuration: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load dashboard configuration: {}", e)));
                state.loading.set(false);
                return;
            }
        };
        match dashboard.indicators() {
            Ok(names) => state.indicators.set(names),
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to list indicators: {}", e)));
                state.loading.set(false);
                return;
            }
        }
        state.dashboard.set(Some(Rc::new(dashboard)));
        state.loading.set(false);
    });

    // Full re-render whenever the selection changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let dashboard = match &*state.dashboard.read() {
            Some(d) => Rc::clone(d),
            None => return,
        };
        let selection = state.selection.read().clone();

        js_bridge::init_renderers();

        let pass = match dashboard.render(&selection) {
            Ok(pass) => pass,
            Err(e) => {
                log::error!("Render pass failed: {}", e);
                state.error_msg.set(Some(format!("Render failed: {}", e)));
                return;
            }
        };

        let payload = serde_json::to_string(&pass.map_payload).unwrap_or_default();
        js_bridge::render_kepler_map(MAP_ID, &payload);

        let previous = match &*state.render_pass.peek() {
            Some(p) => p.charts.len(),
            None => 0,
        };
        for idx in pass.charts.len()..previous {
            js_bridge::destroy_chart(&chart_id(idx));
        }
        for (idx, chart) in pass.charts.iter().enumerate() {
            let spec = serde_json::to_string(&chart.to_vega_lite()).unwrap_or_default();
            js_bridge::render_vega_chart(&chart_id(idx), &spec);
        }

        state.render_pass.set(Some(pass));
    });

    let render_pass = state.render_pass.read().clone();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Insights on Economic Trends in Indian Cities".to_string(),
                subtitle: "DeCODE (Deciphering City Outcomes through Data Exploration) Challenge".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",

                    IndicatorSelector {}

                    div {
                        style: "flex: 1; min-width: 0;",

                        ChartContainer {
                            id: MAP_ID.to_string(),
                            min_height: 600,
                        }

                        if let Some(pass) = render_pass {
                            for panel in pass.panels.iter() {
                                IndicatorPanelView {
                                    key: "{panel.name}",
                                    panel: panel.clone(),
                                }
                            }

                            if pass.charts.is_empty() {
                                p { "{NO_CHARTS}" }
                            } else {
                                p { "{CHARTS_HEADING}" }
                                for idx in 0..pass.charts.len() {
                                    ChartContainer {
                                        key: "{idx}",
                                        id: chart_id(idx),
                                        min_height: 400,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
