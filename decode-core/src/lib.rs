//! Core types for the city indicator dashboard.
//!
//! This crate provides:
//! - `indicator`: typed `City`/`Result`/`UOM` records parsed from CSV
//! - `catalog`: discovery and loading of indicator datasets from a backing store
//! - `name`: helpers for file-derived, year-qualified indicator names
//! - `error`: the shared error taxonomy

pub mod catalog;
pub mod error;
pub mod indicator;
pub mod name;

pub use catalog::{Catalog, DirectoryStore, EmbeddedStore, IndicatorStore};
pub use error::{DecodeError, Result};
pub use indicator::{is_null_cell, IndicatorDataset, IndicatorRow};
