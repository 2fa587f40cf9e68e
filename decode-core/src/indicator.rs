//! Typed indicator records parsed from CSV.
//!
//! Every indicator dataset carries at least the `City`, `Result` and `UOM`
//! columns. They are validated once at load time; any other columns are
//! kept as raw strings so the map layer can forward the full table
//! (coordinates, state names, ...) to the map widget.

use crate::error::{DecodeError, Result};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Serialize;
use std::io::Read;

/// Header of the city name column.
pub const CITY_COLUMN: &str = "City";
/// Header of the numeric measurement column.
pub const RESULT_COLUMN: &str = "Result";
/// Header of the unit-of-measure column.
pub const UOM_COLUMN: &str = "UOM";

/// One city's measurement for an indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub city: String,
    /// `None` when the cell is empty or not a number.
    pub result: Option<f64>,
    pub uom: String,
    /// Every cell of the source record, aligned with [`IndicatorDataset::columns`].
    #[serde(skip)]
    pub values: Vec<String>,
}

/// A named indicator table, rows kept in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorDataset {
    /// File-derived, year-qualified name, e.g. "Cluster Strength (2021)".
    pub name: String,
    /// All column headers in file order.
    pub columns: Vec<String>,
    pub rows: Vec<IndicatorRow>,
}

/// Cell spellings read as a missing value, compared case-insensitively.
pub const NULL_TOKENS: &[&str] = &["", "null", "na", "n/a", "nan", "none"];

/// True when `cell` is blank or one of [`NULL_TOKENS`].
pub fn is_null_cell(cell: &str) -> bool {
    let trimmed = cell.trim();
    NULL_TOKENS.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
}

fn parse_result(cell: &str) -> std::result::Result<Option<f64>, ()> {
    if is_null_cell(cell) {
        return Ok(None);
    }
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(()),
    }
}

impl IndicatorDataset {
    /// Parse a dataset from CSV text.
    ///
    /// # Example
    ///
    /// ```
    /// use decode_core::IndicatorDataset;
    ///
    /// let ds = IndicatorDataset::from_csv(
    ///     "Cluster Strength (2021)",
    ///     "City,Result,UOM\nPune,12,Number\nSurat,,Number\n",
    /// ).unwrap();
    /// assert_eq!(ds.rows.len(), 2);
    /// assert_eq!(ds.rows[1].result, None);
    /// ```
    pub fn from_csv(name: &str, csv_data: &str) -> Result<Self> {
        Self::from_reader(name, csv_data.as_bytes())
    }

    /// Parse a dataset from any reader producing CSV with headers.
    ///
    /// Fails with [`DecodeError::Schema`] when `City`, `Result` or `UOM`
    /// is absent. Non-numeric `Result` cells become null and are counted
    /// in a warning.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
        let position = |header: &str| columns.iter().position(|c| c == header);

        let (city_idx, result_idx, uom_idx) = match (
            position(CITY_COLUMN),
            position(RESULT_COLUMN),
            position(UOM_COLUMN),
        ) {
            (Some(c), Some(r), Some(u)) => (c, r, u),
            (c, r, u) => {
                let missing = [(c, CITY_COLUMN), (r, RESULT_COLUMN), (u, UOM_COLUMN)]
                    .iter()
                    .filter(|(idx, _)| idx.is_none())
                    .map(|(_, header)| header.to_string())
                    .collect();
                return Err(DecodeError::Schema {
                    source_name: name.to_string(),
                    missing,
                });
            }
        };

        let mut rows = Vec::new();
        let mut skipped = 0u32;
        for record in rdr.records() {
            let record = record?;
            let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();
            let result = match parse_result(record.get(result_idx).unwrap_or("")) {
                Ok(v) => v,
                Err(()) => {
                    skipped += 1;
                    None
                }
            };
            rows.push(IndicatorRow {
                city: cell(city_idx),
                result,
                uom: cell(uom_idx),
                values: record.iter().map(String::from).collect(),
            });
        }

        if skipped > 0 {
            warn!(
                "{}: {} non-numeric Result value(s) treated as missing",
                name, skipped
            );
        }
        debug!("{}: parsed {} rows, {} columns", name, rows.len(), columns.len());

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    /// Rows with a non-null `Result`, in file order.
    pub fn non_null_rows(&self) -> impl Iterator<Item = &IndicatorRow> {
        self.rows.iter().filter(|r| r.result.is_some())
    }

    /// Whether at least one row has a usable `Result`.
    pub fn has_results(&self) -> bool {
        self.non_null_rows().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
State,City,Result,UOM,Latitude,Longitude
Maharashtra,Pune,12,Number,18.52,73.85
Gujarat,Surat,NA,Number,21.17,72.83
Karnataka,Bengaluru,abc,Number,12.97,77.59
";

    #[test]
    fn test_parse_with_extra_columns() {
        let ds = IndicatorDataset::from_csv("Clusters (2021)", SAMPLE).unwrap();
        assert_eq!(ds.name, "Clusters (2021)");
        assert_eq!(ds.columns.len(), 6);
        assert_eq!(ds.rows.len(), 3);
        assert_eq!(ds.rows[0].city, "Pune");
        assert_eq!(ds.rows[0].result, Some(12.0));
        assert_eq!(ds.rows[0].uom, "Number");
        assert_eq!(ds.rows[0].values[4], "18.52");
        assert_eq!(ds.rows[1].result, None);
        assert_eq!(ds.rows[2].result, None);
        assert_eq!(ds.non_null_rows().count(), 1);
        assert!(ds.has_results());
    }

    #[test]
    fn test_missing_columns_is_schema_error() {
        let err = IndicatorDataset::from_csv("Broken", "City,Value\nPune,3\n").unwrap_err();
        match err {
            DecodeError::Schema {
                source_name,
                missing,
            } => {
                assert_eq!(source_name, "Broken");
                assert_eq!(missing, vec!["Result".to_string(), "UOM".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_headers_are_trimmed() {
        let ds = IndicatorDataset::from_csv("Padded", " City , Result ,UOM\nPune, 4.5 ,%\n").unwrap();
        assert_eq!(ds.rows[0].result, Some(4.5));
        assert_eq!(ds.rows[0].uom, "%");
    }

    #[test]
    fn test_all_null_dataset() {
        let ds = IndicatorDataset::from_csv("Empty", "City,Result,UOM\nPune,,%\nSurat,null,%\n").unwrap();
        assert_eq!(ds.rows.len(), 2);
        assert!(!ds.has_results());
    }

    #[test]
    fn test_parse_result_cells() {
        assert_eq!(parse_result("0"), Ok(Some(0.0)));
        assert_eq!(parse_result(" -1.5 "), Ok(Some(-1.5)));
        assert_eq!(parse_result("N/A"), Ok(None));
        assert_eq!(parse_result("NaN"), Ok(None));
        assert_eq!(parse_result("inf"), Err(()));
        assert_eq!(parse_result("twelve"), Err(()));
        assert!(is_null_cell(" NA "));
        assert!(!is_null_cell("0"));
    }
}
