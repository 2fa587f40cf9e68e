//! Static Visual Configuration for the map widget.
//!
//! The document is a saved Kepler.gl map config. Only its outline is
//! validated here: `config.visState.layers` must be an array whose entries
//! each name a `dataId` (either `layer.config.dataId` as Kepler saves it,
//! or a top-level `layer.dataId`). Everything else is passed through to the
//! widget untouched.

use decode_core::{DecodeError, Result};
use log::info;
use serde_json::Value;

/// Immutable, validated map configuration. Load once and share by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    document: Value,
    data_ids: Vec<String>,
}

impl VisualConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_value(document: Value) -> Result<Self> {
        let layers = document
            .pointer("/config/visState/layers")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                DecodeError::Config("expected an array at config.visState.layers".to_string())
            })?;

        let mut data_ids = Vec::with_capacity(layers.len());
        for (idx, layer) in layers.iter().enumerate() {
            let data_id = layer
                .pointer("/config/dataId")
                .or_else(|| layer.get("dataId"))
                .and_then(Value::as_str)
                .ok_or_else(|| DecodeError::Config(format!("layer {} has no dataId", idx)))?;
            data_ids.push(data_id.to_string());
        }

        info!(
            "Loaded visual configuration with {} layer(s): {}",
            data_ids.len(),
            data_ids.join(", ")
        );
        Ok(Self { document, data_ids })
    }

    /// The full saved-config document, as handed to the widget.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// `dataId` of every configured layer, in layer order.
    pub fn data_ids(&self) -> &[String] {
        &self.data_ids
    }

    /// Whether some configured layer is bound to `layer_id`.
    pub fn styles(&self, layer_id: &str) -> bool {
        self.data_ids.iter().any(|id| id == layer_id)
    }
}
