//! Full render pass to disk.
//!
//! Output layout:
//! - `map.json`: Kepler `addDataToMap` payload (datasets + visual configuration)
//! - `charts/NN-<slug>.vl.json`: one Vega-Lite spec per charted indicator
//! - `report.txt`: the indicator panels and chart list as text
//! - `manifest.json`: selection, layer ids, dropped/unstyled layers, chart files

use crate::setup::open_dashboard;
use crate::{DataArgs, StaticArgs};
use anyhow::Context;
use chrono::Local;
use decode_core::name::slugify;
use decode_data::SelectionSet;
use decode_render::{RenderPass, VisualConfig};
use log::{debug, info};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

const CHART_SUFFIX: &str = ".vl.json";

pub fn run_render(
    data: &DataArgs,
    statics: &StaticArgs,
    select: &[String],
    all: bool,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let dashboard = open_dashboard(data, statics)?;

    let selection: SelectionSet = if all {
        dashboard.indicators()?.into_iter().collect()
    } else {
        select.iter().map(String::as_str).collect()
    };

    let pass = dashboard.render(&selection)?;
    write_render_pass(&pass, dashboard.visual_config(), out_dir)?;
    print!("{}", pass.to_text());
    Ok(())
}

/// Remove chart files left in `charts_dir` by an earlier render.
fn clear_charts(charts_dir: &Path) -> anyhow::Result<usize> {
    let mut removed = 0;
    for dir_entry in fs::read_dir(charts_dir)? {
        let path = dir_entry?.path();
        let is_chart = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(CHART_SUFFIX));
        if is_chart && path.is_file() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Write every artifact of `pass` under `out_dir`, returning the files written.
///
/// Chart files from a previous render into the same directory are removed
/// first, so `charts/` always matches the current selection.
pub fn write_render_pass(
    pass: &RenderPass,
    config: &VisualConfig,
    out_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let charts_dir = out_dir.join("charts");
    fs::create_dir_all(&charts_dir)
        .with_context(|| format!("Failed to create {}", charts_dir.display()))?;
    let stale = clear_charts(&charts_dir)?;
    if stale > 0 {
        debug!("Removed {} stale chart file(s) from {}", stale, charts_dir.display());
    }

    let mut written = Vec::new();

    let map_path = out_dir.join("map.json");
    fs::write(&map_path, serde_json::to_string_pretty(&pass.map_payload)?)?;
    written.push(map_path);

    let mut chart_files = Vec::with_capacity(pass.charts.len());
    for (idx, chart) in pass.charts.iter().enumerate() {
        let file_name = format!("{:02}-{}{}", idx + 1, slugify(&chart.title), CHART_SUFFIX);
        let path = charts_dir.join(&file_name);
        fs::write(&path, serde_json::to_string_pretty(&chart.to_vega_lite())?)?;
        chart_files.push(file_name);
        written.push(path);
    }

    let report_path = out_dir.join("report.txt");
    fs::write(&report_path, pass.to_text())?;
    written.push(report_path);

    let manifest = json!({
        "generated_at": Local::now().to_rfc3339(),
        "selected": pass.panels.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        "layer_ids": pass.map.layer_ids().collect::<Vec<_>>(),
        "dropped_layers": pass.map.dropped(),
        "unstyled_layers": pass.map.unstyled_layers(config),
        "charts": chart_files,
    });
    let manifest_path = out_dir.join("manifest.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    written.push(manifest_path);

    info!("Wrote {} file(s) to {}", written.len(), out_dir.display());
    Ok(written)
}
