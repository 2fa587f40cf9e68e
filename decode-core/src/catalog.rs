//! Indicator Catalog: discovery and loading of indicator datasets.
//!
//! A backing store is anything that can enumerate named entries and return
//! their text. The catalog keeps entries ending in `.csv`, in the store's
//! discovery order, and never caches: every `load` re-reads the store.

use crate::error::{DecodeError, Result};
use crate::indicator::IndicatorDataset;
use crate::name::{indicator_name_from_entry, CSV_SUFFIX};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// A read-only collection of named tabular entries.
pub trait IndicatorStore {
    /// Entry names (with suffix) in discovery order.
    fn entries(&self) -> Result<Vec<String>>;

    /// Contents of `entry`, or `None` if the store has no such entry.
    fn read(&self, entry: &str) -> Result<Option<String>>;

    /// Short label for log messages.
    fn label(&self) -> String;
}

/// Indicator CSV files in a filesystem directory.
///
/// Discovery order is whatever the directory listing yields; it is not sorted.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl IndicatorStore for DirectoryStore {
    fn entries(&self) -> Result<Vec<String>> {
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.root)? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }
            if let Some(file_name) = dir_entry.file_name().to_str() {
                entries.push(file_name.to_string());
            }
        }
        Ok(entries)
    }

    fn read(&self, entry: &str) -> Result<Option<String>> {
        // Only plain file names directly under the root are entries.
        if Path::new(entry).file_name().and_then(|n| n.to_str()) != Some(entry) {
            return Ok(None);
        }
        let path = self.root.join(entry);
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn label(&self) -> String {
        self.root.display().to_string()
    }
}

/// Indicator CSVs compiled into the binary as `(file name, contents)` pairs.
///
/// Discovery order is the order of the slice.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedStore {
    entries: &'static [(&'static str, &'static str)],
}

impl EmbeddedStore {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }
}

impl IndicatorStore for EmbeddedStore {
    fn entries(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(name, _)| name.to_string()).collect())
    }

    fn read(&self, entry: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .iter()
            .find(|(name, _)| *name == entry)
            .map(|(_, contents)| contents.to_string()))
    }

    fn label(&self) -> String {
        format!("embedded ({} entries)", self.entries.len())
    }
}

/// Lists and loads indicator datasets from a backing store.
pub struct Catalog {
    store: Box<dyn IndicatorStore>,
}

impl Catalog {
    pub fn new(store: impl IndicatorStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Indicator names: entries ending in `.csv` with the suffix stripped,
    /// in discovery order.
    pub fn list_indicators(&self) -> Result<Vec<String>> {
        let names: Vec<String> = self
            .store
            .entries()?
            .iter()
            .filter_map(|entry| indicator_name_from_entry(entry))
            .map(String::from)
            .collect();
        info!(
            "Discovered {} indicator(s) in {}",
            names.len(),
            self.store.label()
        );
        Ok(names)
    }

    /// Load the dataset backing `name`.
    ///
    /// Fails with [`DecodeError::NotFound`] when the store does not list a
    /// `<name>.csv` entry.
    pub fn load(&self, name: &str) -> Result<IndicatorDataset> {
        let entry = format!("{}{}", name, CSV_SUFFIX);
        if !self.store.entries()?.contains(&entry) {
            return Err(DecodeError::NotFound(name.to_string()));
        }
        match self.store.read(&entry)? {
            Some(contents) => IndicatorDataset::from_csv(name, &contents),
            None => Err(DecodeError::NotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    static ENTRIES: &[(&str, &str)] = &[
        ("Zeta Index (2020-21).csv", "City,Result,UOM\nPune,3,%\n"),
        ("kepler.gl.json", "{}"),
        ("Alpha Index (2019-20).csv", "City,Result,UOM\nSurat,7,%\n"),
    ];

    #[test]
    fn test_embedded_keeps_discovery_order() {
        let catalog = Catalog::new(EmbeddedStore::new(ENTRIES));
        let names = catalog.list_indicators().unwrap();
        assert_eq!(names, vec!["Zeta Index (2020-21)", "Alpha Index (2019-20)"]);
    }

    #[test]
    fn test_embedded_load() {
        let catalog = Catalog::new(EmbeddedStore::new(ENTRIES));
        let ds = catalog.load("Alpha Index (2019-20)").unwrap();
        assert_eq!(ds.rows[0].city, "Surat");
        assert!(matches!(
            catalog.load("Missing"),
            Err(DecodeError::NotFound(name)) if name == "Missing"
        ));
    }

    #[test]
    fn test_directory_store() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("MSME Clusters (2020-21).csv"), "City,Result,UOM\nPune,3,Number\n").unwrap();
        fs::write(dir.path().join("readme.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let catalog = Catalog::new(DirectoryStore::new(dir.path()));
        let names = catalog.list_indicators().unwrap();
        assert_eq!(names, vec!["MSME Clusters (2020-21)"]);

        let ds = catalog.load("MSME Clusters (2020-21)").unwrap();
        assert_eq!(ds.rows.len(), 1);
        assert_eq!(ds.rows[0].result, Some(3.0));

        assert!(matches!(catalog.load("nested"), Err(DecodeError::NotFound(_))));
    }

    #[test]
    fn test_load_is_repeatable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.csv"), "City,Result,UOM\nPune,3,%\n").unwrap();
        let catalog = Catalog::new(DirectoryStore::new(dir.path()));
        assert_eq!(catalog.load("A").unwrap(), catalog.load("A").unwrap());
    }

    #[test]
    fn test_load_stays_inside_directory() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        fs::write(dir.path().join("secret.csv"), "City,Result,UOM\nX,1,%\n").unwrap();

        let catalog = Catalog::new(DirectoryStore::new(&data_dir));
        assert!(catalog.list_indicators().unwrap().is_empty());
        assert!(matches!(
            catalog.load("../secret"),
            Err(DecodeError::NotFound(name)) if name == "../secret"
        ));

        let store = DirectoryStore::new(&data_dir);
        assert_eq!(store.read("../secret.csv").unwrap(), None);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let catalog = Catalog::new(DirectoryStore::new("/nonexistent/decode/data"));
        assert!(matches!(catalog.list_indicators(), Err(DecodeError::Io(_))));
    }
}
