//! Map Composer: binds selected datasets to map layer identifiers.
//!
//! The visual configuration styles layers by `dataId`, so each dataset must
//! be registered under exactly the identifier the configuration was authored
//! against. Identifier assignment is a [`LayerIdPolicy`]; a dataset for which
//! the policy returns `None` is left off the map (and logged), and a layer
//! whose id has no configuration entry renders unstyled. Neither case is an
//! error.

use crate::config::VisualConfig;
use decode_core::{is_null_cell, IndicatorDataset, Result};
use log::{info, warn};
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Maps an indicator name to the layer identifier it is registered under.
pub trait LayerIdPolicy {
    fn layer_id(&self, indicator_name: &str) -> Option<String>;
}

/// Uses the file-derived indicator name itself as the layer id.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameAsLayerId;

impl LayerIdPolicy for NameAsLayerId {
    fn layer_id(&self, indicator_name: &str) -> Option<String> {
        Some(indicator_name.to_string())
    }
}

/// Fixed table of indicator name to externally assigned layer id.
/// Names outside the table get no layer.
#[derive(Debug, Clone, Default)]
pub struct ExplicitLayerIds {
    ids: HashMap<String, String>,
}

impl ExplicitLayerIds {
    /// Parse a JSON object of `{"<indicator name>": "<dataId>"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let ids: HashMap<String, String> = serde_json::from_str(json)?;
        info!("Loaded {} explicit layer id(s)", ids.len());
        Ok(Self { ids })
    }

    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            ids: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl LayerIdPolicy for ExplicitLayerIds {
    fn layer_id(&self, indicator_name: &str) -> Option<String> {
        self.ids.get(indicator_name).cloned()
    }
}

/// One dataset registered on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayer {
    pub id: String,
    /// Indicator name the layer came from.
    pub label: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Layers for one render pass, keyed by layer id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapLayerCollection {
    layers: BTreeMap<String, MapLayer>,
    dropped: Vec<String>,
}

impl MapLayerCollection {
    pub fn get(&self, layer_id: &str) -> Option<&MapLayer> {
        self.layers.get(layer_id)
    }

    pub fn layer_ids(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    pub fn layers(&self) -> impl Iterator<Item = &MapLayer> {
        self.layers.values()
    }

    /// Indicators that the policy gave no layer id.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer ids that no layer in `config` is bound to.
    pub fn unstyled_layers<'a>(&'a self, config: &VisualConfig) -> Vec<&'a str> {
        self.layer_ids().filter(|id| !config.styles(id)).collect()
    }
}

/// Register each selected dataset under its policy-assigned layer id.
///
/// A later dataset mapped to an id already in use replaces the earlier one.
pub fn build_map<'a>(
    selected: impl IntoIterator<Item = &'a IndicatorDataset>,
    policy: &dyn LayerIdPolicy,
) -> MapLayerCollection {
    let mut collection = MapLayerCollection::default();
    for dataset in selected {
        let Some(id) = policy.layer_id(&dataset.name) else {
            warn!("No map layer id for {}; layer not added", dataset.name);
            collection.dropped.push(dataset.name.clone());
            continue;
        };
        let layer = MapLayer {
            id: id.clone(),
            label: dataset.name.clone(),
            columns: dataset.columns.clone(),
            rows: dataset.rows.iter().map(|r| r.values.clone()).collect(),
        };
        if let Some(previous) = collection.layers.insert(id.clone(), layer) {
            warn!("Layer {} from {} replaced by {}", id, previous.label, dataset.name);
        }
    }
    collection
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum FieldType {
    Integer,
    Real,
    Text,
}

impl FieldType {
    fn infer(layer: &MapLayer, column: usize) -> Self {
        let mut field_type = FieldType::Integer;
        let mut seen = false;
        for row in &layer.rows {
            let cell = row.get(column).map(String::as_str).unwrap_or("");
            if is_null_cell(cell) {
                continue;
            }
            seen = true;
            if field_type == FieldType::Integer && cell.parse::<i64>().is_err() {
                field_type = FieldType::Real;
            }
            if field_type == FieldType::Real && cell.parse::<f64>().is_err() {
                return FieldType::Text;
            }
        }
        if seen {
            field_type
        } else {
            FieldType::Text
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Real => "real",
            FieldType::Text => "string",
        }
    }

    fn cell(self, cell: &str) -> Value {
        if self != FieldType::Text && is_null_cell(cell) {
            return Value::Null;
        }
        match self {
            FieldType::Integer => cell.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
            FieldType::Real => cell.parse::<f64>().map(Value::from).unwrap_or(Value::Null),
            FieldType::Text => Value::String(cell.to_string()),
        }
    }
}

fn layer_dataset(layer: &MapLayer) -> Value {
    let types: Vec<FieldType> = (0..layer.columns.len())
        .map(|idx| FieldType::infer(layer, idx))
        .collect();
    let fields: Vec<Value> = layer
        .columns
        .iter()
        .zip(&types)
        .map(|(name, t)| json!({"name": name, "type": t.name()}))
        .collect();
    let rows: Vec<Value> = layer
        .rows
        .iter()
        .map(|row| {
            Value::Array(
                types
                    .iter()
                    .enumerate()
                    .map(|(idx, t)| t.cell(row.get(idx).map(String::as_str).unwrap_or("")))
                    .collect(),
            )
        })
        .collect();
    json!({
        "info": {"id": layer.id, "label": layer.label},
        "data": {"fields": fields, "rows": rows},
    })
}

/// The document handed to the map widget: every layer as a Kepler dataset
/// plus the visual configuration. The widget repaints the whole map from it.
pub fn render_payload(collection: &MapLayerCollection, config: &VisualConfig) -> Value {
    let unstyled = collection.unstyled_layers(config);
    if !unstyled.is_empty() {
        warn!(
            "Layer id(s) without a styling entry in the visual configuration: {}",
            unstyled.join(", ")
        );
    }
    let datasets: Vec<Value> = collection.layers().map(layer_dataset).collect();
    let mut payload = Map::new();
    payload.insert("datasets".to_string(), Value::Array(datasets));
    payload.insert("config".to_string(), config.document().clone());
    payload.insert("options".to_string(), json!({"centerMap": true}));
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(name: &str) -> IndicatorDataset {
        IndicatorDataset::from_csv(
            name,
            "City,Result,UOM,Latitude,Population\nPune,12,Number,18.52,3124458\nSurat,,Number,21.17,4467797\n",
        )
        .unwrap()
    }

    fn config() -> VisualConfig {
        VisualConfig::from_json(
            r#"{"version": "v1", "config": {"visState": {"layers": [{"config": {"dataId": "cukf9i4t"}}]}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_name_policy_uses_indicator_name() {
        let a = dataset("Clusters (2020-21)");
        let collection = build_map([&a], &NameAsLayerId);
        assert_eq!(collection.layer_ids().collect::<Vec<_>>(), vec!["Clusters (2020-21)"]);
        assert!(collection.dropped().is_empty());
        assert_eq!(collection.get("Clusters (2020-21)").unwrap().rows.len(), 2);
    }

    #[test]
    fn test_explicit_policy_drops_unmapped() {
        let mapped = dataset("Clusters (2020-21)");
        let unmapped = dataset("Literacy (2011)");
        let policy = ExplicitLayerIds::from_pairs([("Clusters (2020-21)", "cukf9i4t")]);
        let collection = build_map([&mapped, &unmapped], &policy);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("cukf9i4t").unwrap().label, "Clusters (2020-21)");
        assert_eq!(collection.dropped(), ["Literacy (2011)".to_string()]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let a = dataset("A (2021)");
        let b = dataset("B (2021)");
        let first = build_map([&a, &b], &NameAsLayerId);
        let second = build_map([&a, &b], &NameAsLayerId);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unstyled_layers() {
        let a = dataset("Clusters (2020-21)");
        let policy = ExplicitLayerIds::from_json(r#"{"Clusters (2020-21)": "cukf9i4t"}"#).unwrap();
        let styled = build_map([&a], &policy);
        assert!(styled.unstyled_layers(&config()).is_empty());

        let unstyled = build_map([&a], &NameAsLayerId);
        assert_eq!(unstyled.unstyled_layers(&config()), vec!["Clusters (2020-21)"]);
    }

    #[test]
    fn test_payload_types_fields() {
        let a = dataset("Clusters (2020-21)");
        let collection = build_map([&a], &ExplicitLayerIds::from_pairs([("Clusters (2020-21)", "cukf9i4t")]));
        let payload = render_payload(&collection, &config());

        let ds = &payload["datasets"][0];
        assert_eq!(ds["info"]["id"], "cukf9i4t");
        assert_eq!(ds["info"]["label"], "Clusters (2020-21)");
        let fields: Vec<(&str, &str)> = ds["data"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| (f["name"].as_str().unwrap(), f["type"].as_str().unwrap()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("City", "string"),
                ("Result", "integer"),
                ("UOM", "string"),
                ("Latitude", "real"),
                ("Population", "integer"),
            ]
        );
        assert_eq!(ds["data"]["rows"][1][1], Value::Null);
        assert_eq!(ds["data"]["rows"][0][3], 18.52);
        assert_eq!(payload["config"]["version"], "v1");
        assert_eq!(payload["options"]["centerMap"], true);
    }

    #[test]
    fn test_null_tokens_keep_numeric_field() {
        let ds = IndicatorDataset::from_csv(
            "Women Entrepreneurs (2020-21)",
            "City,Result,UOM\nPune,14.2,%\nAgra,NA,%\nAgartala,null,%\n",
        )
        .unwrap();
        let payload = render_payload(&build_map([&ds], &NameAsLayerId), &config());

        let data = &payload["datasets"][0]["data"];
        assert_eq!(data["fields"][1]["name"], "Result");
        assert_eq!(data["fields"][1]["type"], "real");
        assert_eq!(data["rows"][0][1], 14.2);
        assert_eq!(data["rows"][1][1], Value::Null);
        assert_eq!(data["rows"][2][1], Value::Null);
        assert_eq!(data["rows"][1][2], "%");
    }

    #[test]
    fn test_empty_selection_payload() {
        let payload = render_payload(&build_map(Vec::<&IndicatorDataset>::new(), &NameAsLayerId), &config());
        assert_eq!(payload["datasets"].as_array().unwrap().len(), 0);
    }
}
