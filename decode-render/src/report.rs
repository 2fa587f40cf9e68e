//! Plain-text rendering of a render pass.

use crate::dashboard::{IndicatorPanel, RenderPass};
use decode_data::{CityValue, IndicatorSummary};
use std::fmt::Write;

pub const NO_DATA: &str = "No data available.";
pub const CHARTS_HEADING: &str = "Charts for selected indicators:";
pub const NO_CHARTS: &str = "No data available for selected indicators.";

/// Whole numbers print without a fractional part, everything else as-is.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

fn city_line(label: &str, city_value: Option<&CityValue>) -> String {
    match city_value {
        Some(cv) => format!("{} City: {}, Value: {}", label, cv.city, format_value(cv.value)),
        None => NO_DATA.to_string(),
    }
}

/// Lines describing one summary, as shown under the indicator heading.
pub fn summary_lines(summary: &IndicatorSummary) -> Vec<String> {
    let mut lines = vec![
        city_line("Highest", Some(&summary.highest)),
        city_line("Lowest", summary.lowest.as_ref()),
        format!("Average Value for {}: {:.2}", summary.indicator, summary.mean),
    ];
    if !summary.unit_text.is_empty() {
        lines.push(format!("Unit: {}", summary.unit_text));
    }
    lines
}

impl IndicatorPanel {
    pub fn to_text(&self) -> String {
        let mut out = format!("Indicator: {}\n", self.name);
        match &self.description {
            Ok(d) => {
                let _ = writeln!(out, "Definition: {}", d.definition);
                let _ = writeln!(out, "Insight: {}", d.insight);
            }
            Err(message) => {
                let _ = writeln!(out, "{}", message);
            }
        }
        match &self.summary {
            Ok(summary) => {
                for line in summary_lines(summary) {
                    let _ = writeln!(out, "{}", line);
                }
            }
            Err(message) => {
                let _ = writeln!(out, "{}", message);
            }
        }
        out
    }
}

impl RenderPass {
    /// Panels in order, then the chart list.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for panel in &self.panels {
            out.push_str(&panel.to_text());
            out.push('\n');
        }
        if self.charts.is_empty() {
            out.push_str(NO_CHARTS);
            out.push('\n');
        } else {
            out.push_str(CHARTS_HEADING);
            out.push('\n');
            for chart in &self.charts {
                let _ = writeln!(out, "- {} ({} cities)", chart.title, chart.points.len());
            }
        }
        out
    }
}
