//! Description Lookup: static definitions and insights per indicator.
//!
//! The table is keyed by base indicator name (reporting period stripped),
//! so every year of an indicator shares one entry. It is loaded once from a
//! JSON object of the form:
//!
//! ```text
//! {
//!   "Cluster Strength": {"definition": "...", "insight": "..."}
//! }
//! ```

use decode_core::name::base_name;
use decode_core::{DecodeError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Human-readable text for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub definition: String,
    pub insight: String,
}

/// Immutable lookup from base indicator name to [`Description`].
#[derive(Debug, Clone, Default)]
pub struct DescriptionTable {
    entries: HashMap<String, Description>,
}

impl DescriptionTable {
    /// Parse the description table from JSON. Keys are trimmed.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Description> = serde_json::from_str(json)?;
        let table = Self::from_entries(raw);
        info!("Loaded {} indicator description(s)", table.len());
        Ok(table)
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, Description)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, description)| (key.trim().to_string(), description))
                .collect(),
        }
    }

    /// Look up the description for an indicator name such as
    /// `"Cluster Strength (2021)"`; the parenthesized period is ignored.
    pub fn describe(&self, indicator_name: &str) -> Option<&Description> {
        self.entries.get(base_name(indicator_name))
    }

    /// Like [`describe`](Self::describe), but a miss is a
    /// [`DecodeError::MissingDescription`] naming the full indicator.
    pub fn require(&self, indicator_name: &str) -> Result<&Description> {
        self.describe(indicator_name)
            .ok_or_else(|| DecodeError::MissingDescription(indicator_name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
