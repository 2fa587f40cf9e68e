//! Chart Composer: one binned-color scatter chart per indicator.
//!
//! Charts are emitted as Vega-Lite v5 specs with the data inlined, so any
//! Vega-Lite renderer (vega-embed in the dashboard, or an offline viewer for
//! the CLI output) can draw them.

use decode_core::IndicatorDataset;
use serde::Serialize;
use serde_json::{json, Value};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
/// Upper bound on color bins over the `Result` range.
pub const MAX_COLOR_BINS: u32 = 6;
pub const COLOR_SCHEME: &str = "viridis";
pub const CHART_WIDTH: u32 = 600;
pub const CHART_HEIGHT: u32 = 400;

/// One plotted city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Result")]
    pub result: f64,
    #[serde(rename = "UOM")]
    pub uom: String,
}

/// A scatter chart of `Result` by city. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

/// Build the chart for a dataset. Rows with a null `Result` are dropped;
/// if nothing remains the indicator gets no chart.
pub fn build_chart(dataset: &IndicatorDataset, title: &str) -> Option<ChartSpec> {
    let points: Vec<ChartPoint> = dataset
        .rows
        .iter()
        .filter_map(|row| {
            row.result.map(|result| ChartPoint {
                city: row.city.clone(),
                result,
                uom: row.uom.clone(),
            })
        })
        .collect();

    if points.is_empty() {
        log::debug!("{}: no non-null Result values, chart skipped", dataset.name);
        return None;
    }
    Some(ChartSpec {
        title: title.to_string(),
        points,
    })
}

impl ChartSpec {
    /// The Vega-Lite document: x = City (nominal), y = Result (quantitative),
    /// color = Result binned into at most six viridis bins. Scales are bound
    /// to an interval selection so the chart pans and zooms.
    pub fn to_vega_lite(&self) -> Value {
        json!({
            "$schema": VEGA_LITE_SCHEMA,
            "title": self.title,
            "width": CHART_WIDTH,
            "height": CHART_HEIGHT,
            "data": {"values": self.points},
            "mark": "circle",
            "params": [{"name": "grid", "select": "interval", "bind": "scales"}],
            "encoding": {
                "x": {"field": "City", "type": "nominal"},
                "y": {"field": "Result", "type": "quantitative"},
                "color": {
                    "field": "Result",
                    "type": "quantitative",
                    "bin": {"maxbins": MAX_COLOR_BINS},
                    "scale": {"scheme": COLOR_SCHEME},
                },
                "tooltip": [
                    {"field": "City", "type": "nominal"},
                    {"field": "Result", "type": "quantitative"},
                    {"field": "UOM", "type": "nominal"},
                ],
            },
        })
    }
}
