//! One render pass over the current selection.
//!
//! A checkbox toggle triggers a full rebuild: every selected indicator is
//! loaded afresh, composed into the map layer collection, summarized,
//! described and charted. Failures for one indicator become an inline
//! message for that indicator only.

use crate::chart::{build_chart, ChartSpec};
use crate::config::VisualConfig;
use crate::map::{build_map, render_payload, LayerIdPolicy, MapLayerCollection};
use decode_core::{Catalog, IndicatorDataset, Result};
use decode_data::{summarize, Description, DescriptionTable, IndicatorSummary, SelectionSet};
use log::{error, info, warn};
use serde_json::Value;

/// Read-only collaborators shared by every render pass.
pub struct Dashboard {
    catalog: Catalog,
    descriptions: DescriptionTable,
    layer_ids: Box<dyn LayerIdPolicy>,
    visual_config: VisualConfig,
}

/// Per-indicator text block: summary and description, or the message shown
/// in their place.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPanel {
    pub name: String,
    pub summary: std::result::Result<IndicatorSummary, String>,
    pub description: std::result::Result<Description, String>,
}

/// Everything a rendering surface needs for one repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub map: MapLayerCollection,
    /// Kepler `addDataToMap` payload built from `map` and the visual configuration.
    pub map_payload: Value,
    /// One panel per selected indicator, in catalog order.
    pub panels: Vec<IndicatorPanel>,
    /// One chart per selected indicator that has data, in catalog order.
    pub charts: Vec<ChartSpec>,
}

impl Dashboard {
    pub fn new(
        catalog: Catalog,
        descriptions: DescriptionTable,
        layer_ids: impl LayerIdPolicy + 'static,
        visual_config: VisualConfig,
    ) -> Self {
        Self {
            catalog,
            descriptions,
            layer_ids: Box::new(layer_ids),
            visual_config,
        }
    }

    /// Indicator names in catalog order; one checkbox each.
    pub fn indicators(&self) -> Result<Vec<String>> {
        self.catalog.list_indicators()
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    pub fn descriptions(&self) -> &DescriptionTable {
        &self.descriptions
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rebuild map, panels and charts from `selection`.
    ///
    /// Only a failure to list the catalog is returned as an error.
    pub fn render(&self, selection: &SelectionSet) -> Result<RenderPass> {
        let names = self.indicators()?;
        let selected = selection.in_catalog_order(&names);

        let mut datasets: Vec<IndicatorDataset> = Vec::with_capacity(selected.len());
        let mut panels = Vec::with_capacity(selected.len());

        for name in selected {
            let description = self
                .descriptions
                .require(name)
                .cloned()
                .map_err(|e| e.to_string());

            let summary = match self.catalog.load(name) {
                Ok(dataset) => {
                    let summary = summarize(&dataset).map_err(|e| e.to_string());
                    datasets.push(dataset);
                    summary
                }
                Err(e) => {
                    if e.is_per_indicator() {
                        warn!("{}: {}", name, e);
                    } else {
                        error!("{}: failed to load: {}", name, e);
                    }
                    Err(e.to_string())
                }
            };

            panels.push(IndicatorPanel {
                name: name.to_string(),
                summary,
                description,
            });
        }

        let map = build_map(&datasets, self.layer_ids.as_ref());
        let map_payload = render_payload(&map, &self.visual_config);
        let charts: Vec<ChartSpec> = datasets
            .iter()
            .filter_map(|dataset| build_chart(dataset, &dataset.name))
            .collect();

        info!(
            "Render pass: {} indicator(s) selected, {} map layer(s), {} chart(s)",
            panels.len(),
            map.len(),
            charts.len()
        );

        Ok(RenderPass {
            map,
            map_payload,
            panels,
            charts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{ExplicitLayerIds, NameAsLayerId};
    use decode_core::EmbeddedStore;

    static ENTRIES: &[(&str, &str)] = &[
        (
            "Total Number of MSME Clusters in the City (2020-21).csv",
            "City,Result,UOM\nA,0,Number\nB,5,Number\nC,10,Number\n",
        ),
        ("Empty Indicator (2021).csv", "City,Result,UOM\nA,,%\nB,,%\n"),
        ("Broken Indicator (2021).csv", "City,Value\nA,1\n"),
        ("Cluster Strength (2021).csv", "City,Result,UOM\nPune,3,Index\n"),
    ];

    const DESCRIPTIONS: &str = r#"{
        "Cluster Strength": {"definition": "Cluster density.", "insight": "Higher is denser."}
    }"#;

    const CONFIG: &str = r#"{"version": "v1", "config": {"visState": {"layers": [
        {"config": {"dataId": "cukf9i4t"}}
    ]}}}"#;

    fn dashboard(policy: impl LayerIdPolicy + 'static) -> Dashboard {
        Dashboard::new(
            Catalog::new(EmbeddedStore::new(ENTRIES)),
            DescriptionTable::from_json(DESCRIPTIONS).unwrap(),
            policy,
            VisualConfig::from_json(CONFIG).unwrap(),
        )
    }

    fn select(names: &[&str]) -> SelectionSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_empty_selection() {
        let pass = dashboard(NameAsLayerId).render(&SelectionSet::new()).unwrap();
        assert!(pass.map.is_empty());
        assert!(pass.panels.is_empty());
        assert!(pass.charts.is_empty());
    }

    #[test]
    fn test_errors_stay_per_indicator() {
        let selection = select(&[
            "Cluster Strength (2021)",
            "Empty Indicator (2021)",
            "Broken Indicator (2021)",
            "Total Number of MSME Clusters in the City (2020-21)",
            "Deleted Indicator (2019)",
        ]);
        let pass = dashboard(NameAsLayerId).render(&selection).unwrap();

        let names: Vec<&str> = pass.panels.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Total Number of MSME Clusters in the City (2020-21)",
                "Empty Indicator (2021)",
                "Broken Indicator (2021)",
                "Cluster Strength (2021)",
                "Deleted Indicator (2019)",
            ]
        );

        let msme = &pass.panels[0];
        let summary = msme.summary.as_ref().unwrap();
        assert_eq!(summary.highest.city, "C");
        assert_eq!(summary.lowest.as_ref().unwrap().city, "B");
        assert_eq!(
            msme.description,
            Err("No description available for Total Number of MSME Clusters in the City (2020-21).".to_string())
        );

        assert_eq!(
            pass.panels[1].summary,
            Err("No data available for Empty Indicator (2021).".to_string())
        );
        assert!(pass.panels[2].summary.as_ref().unwrap_err().contains("missing required column"));
        assert_eq!(
            pass.panels[4].summary,
            Err("No data available for Deleted Indicator (2019).".to_string())
        );
        assert_eq!(pass.panels[3].description.as_ref().unwrap().definition, "Cluster density.");

        // The empty dataset still gets a map layer but no chart.
        assert_eq!(pass.map.len(), 3);
        let titles: Vec<&str> = pass.charts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Total Number of MSME Clusters in the City (2020-21)", "Cluster Strength (2021)"]
        );
    }

    #[test]
    fn test_unmapped_layer_renders_without_error() {
        let policy = ExplicitLayerIds::from_pairs([(
            "Total Number of MSME Clusters in the City (2020-21)",
            "cukf9i4t",
        )]);
        let selection = select(&[
            "Total Number of MSME Clusters in the City (2020-21)",
            "Cluster Strength (2021)",
        ]);
        let pass = dashboard(policy).render(&selection).unwrap();
        assert_eq!(pass.map.layer_ids().collect::<Vec<_>>(), vec!["cukf9i4t"]);
        assert_eq!(pass.map.dropped(), ["Cluster Strength (2021)".to_string()]);
        assert_eq!(pass.map_payload["datasets"].as_array().unwrap().len(), 1);
        assert_eq!(pass.charts.len(), 2);
    }

    #[test]
    fn test_rerender_is_identical() {
        let board = dashboard(NameAsLayerId);
        let selection = select(&["Cluster Strength (2021)", "Empty Indicator (2021)"]);
        assert_eq!(board.render(&selection).unwrap(), board.render(&selection).unwrap());
    }

    #[test]
    fn test_bundled_fixtures() {
        let fixtures = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures");
        let read = |name: &str| std::fs::read_to_string(fixtures.join(name)).unwrap();
        let board = Dashboard::new(
            Catalog::new(decode_core::DirectoryStore::new(fixtures.join("data"))),
            DescriptionTable::from_json(&read("descriptions.json")).unwrap(),
            ExplicitLayerIds::from_json(&read("layer_ids.json")).unwrap(),
            VisualConfig::from_json(&read("kepler.gl.json")).unwrap(),
        );

        let names = board.indicators().unwrap();
        assert_eq!(names.len(), 4);
        let selection: SelectionSet = names.iter().map(String::as_str).collect();
        let pass = board.render(&selection).unwrap();

        assert_eq!(pass.map.len(), 3);
        assert!(pass.map.unstyled_layers(board.visual_config()).is_empty());
        assert_eq!(
            pass.map.dropped(),
            ["Percentage of Women Entrepreneurs in the City (2020-21)".to_string()]
        );
        assert_eq!(pass.charts.len(), 4);

        let msme = pass
            .panels
            .iter()
            .find(|p| p.name == "Total Number of MSME Clusters in the City (2020-21)")
            .unwrap();
        let summary = msme.summary.as_ref().unwrap();
        assert_eq!(summary.highest.city, "Surat");
        assert_eq!(summary.lowest.as_ref().unwrap().city, "Kochi");
        assert!((summary.mean - 280.0 / 9.0).abs() < 1e-9);
        assert!(msme.description.is_ok());
    }
}
