//! Startup loading of the catalog and static tables.
//!
//! Any failure here is fatal: the dashboard has no degraded mode without
//! its visual configuration or description table.

use crate::{DataArgs, StaticArgs};
use anyhow::Context;
use decode_core::{Catalog, DirectoryStore};
use decode_data::DescriptionTable;
use decode_render::{Dashboard, ExplicitLayerIds, NameAsLayerId, VisualConfig};
use std::fs;
use std::path::Path;

fn read(path: &Path, what: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {} {}", what, path.display()))
}

pub fn open_catalog(data: &DataArgs) -> anyhow::Result<Catalog> {
    if !data.data_dir.is_dir() {
        anyhow::bail!("Data directory {} not found", data.data_dir.display());
    }
    Ok(Catalog::new(DirectoryStore::new(&data.data_dir)))
}

pub fn load_descriptions(path: &Path) -> anyhow::Result<DescriptionTable> {
    let json = read(path, "description table")?;
    DescriptionTable::from_json(&json)
        .with_context(|| format!("Malformed description table {}", path.display()))
}

pub fn load_visual_config(path: &Path) -> anyhow::Result<VisualConfig> {
    let json = read(path, "visual configuration")?;
    VisualConfig::from_json(&json)
        .with_context(|| format!("Malformed visual configuration {}", path.display()))
}

/// Build the dashboard with the layer-id policy chosen by `--layer-ids`.
pub fn open_dashboard(data: &DataArgs, statics: &StaticArgs) -> anyhow::Result<Dashboard> {
    let catalog = open_catalog(data)?;
    let descriptions = load_descriptions(&statics.descriptions)?;
    let visual_config = load_visual_config(&statics.config)?;

    let dashboard = match &statics.layer_ids {
        Some(path) => {
            let json = read(path, "layer id table")?;
            let policy = ExplicitLayerIds::from_json(&json)
                .with_context(|| format!("Malformed layer id table {}", path.display()))?;
            log::info!("Using explicit layer ids from {}", path.display());
            Dashboard::new(catalog, descriptions, policy, visual_config)
        }
        None => {
            log::info!("Using indicator names as layer ids");
            Dashboard::new(catalog, descriptions, NameAsLayerId, visual_config)
        }
    };
    Ok(dashboard)
}
