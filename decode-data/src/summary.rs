//! Summary Calculator: highest, lowest non-zero and mean `Result` values.

use decode_core::{DecodeError, IndicatorDataset, IndicatorRow, Result};
use log::debug;
use serde::Serialize;

/// Separator used when a dataset reports more than one unit of measure.
pub const UNIT_SEPARATOR: &str = ", ";

/// A city paired with its `Result` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityValue {
    pub city: String,
    pub value: f64,
}

impl CityValue {
    fn from_row(row: &IndicatorRow, value: f64) -> Self {
        Self {
            city: row.city.clone(),
            value,
        }
    }
}

/// Descriptive statistics for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSummary {
    pub indicator: String,
    /// First row (file order) holding the maximum `Result`.
    pub highest: CityValue,
    /// First row holding the minimum non-zero `Result`.
    ///
    /// When every row is exactly zero this repeats `highest`. When the only
    /// non-zero rows are null there is no lowest value.
    pub lowest: Option<CityValue>,
    /// Mean of all non-null `Result` values, zeros included.
    pub mean: f64,
    /// Distinct non-empty `UOM` values in first-seen order.
    pub unit_text: String,
}

/// Summarize a dataset.
///
/// Fails with [`DecodeError::NoData`] when no row has a non-null `Result`.
///
/// # Example
///
/// ```
/// use decode_core::IndicatorDataset;
/// use decode_data::summarize;
///
/// let ds = IndicatorDataset::from_csv("Share", "City,Result,UOM\nA,0,%\nB,5,%\nC,10,%\n").unwrap();
/// let s = summarize(&ds).unwrap();
/// assert_eq!(s.highest.city, "C");
/// assert_eq!(s.lowest.unwrap().city, "B");
/// assert_eq!(s.mean, 5.0);
/// assert_eq!(s.unit_text, "%");
/// ```
pub fn summarize(dataset: &IndicatorDataset) -> Result<IndicatorSummary> {
    let mut highest: Option<CityValue> = None;
    let mut sum = 0.0;
    let mut count = 0usize;

    for row in &dataset.rows {
        let Some(value) = row.result else { continue };
        sum += value;
        count += 1;
        if highest.as_ref().map_or(true, |h| value > h.value) {
            highest = Some(CityValue::from_row(row, value));
        }
    }

    let highest = match highest {
        Some(h) => h,
        None => return Err(DecodeError::NoData(dataset.name.clone())),
    };

    let lowest = lowest_non_zero(&dataset.rows, &highest);
    let mean = sum / count as f64;
    let unit_text = unit_text(&dataset.rows);

    debug!(
        "{}: highest {} ({}), mean {:.2} over {} values",
        dataset.name, highest.city, highest.value, mean, count
    );

    Ok(IndicatorSummary {
        indicator: dataset.name.clone(),
        highest,
        lowest,
        mean,
        unit_text,
    })
}

/// Minimum over rows whose `Result` is not zero. Null rows count as non-zero
/// but carry no value; only a dataset made entirely of zeros falls back to
/// the highest value.
fn lowest_non_zero(rows: &[IndicatorRow], highest: &CityValue) -> Option<CityValue> {
    let non_zero: Vec<&IndicatorRow> = rows.iter().filter(|r| r.result != Some(0.0)).collect();
    if non_zero.is_empty() {
        return Some(highest.clone());
    }

    let mut lowest: Option<CityValue> = None;
    for row in non_zero {
        let Some(value) = row.result else { continue };
        if lowest.as_ref().map_or(true, |l| value < l.value) {
            lowest = Some(CityValue::from_row(row, value));
        }
    }
    lowest
}

fn unit_text(rows: &[IndicatorRow]) -> String {
    let mut units: Vec<&str> = Vec::new();
    for row in rows {
        let uom = row.uom.as_str();
        if !uom.is_empty() && !units.contains(&uom) {
            units.push(uom);
        }
    }
    units.join(UNIT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(&str, Option<f64>, &str)]) -> IndicatorDataset {
        IndicatorDataset {
            name: "Test Indicator (2020-21)".to_string(),
            columns: vec!["City".to_string(), "Result".to_string(), "UOM".to_string()],
            rows: rows
                .iter()
                .map(|(city, result, uom)| IndicatorRow {
                    city: city.to_string(),
                    result: *result,
                    uom: uom.to_string(),
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_zero_excluded_from_lowest() {
        let ds = dataset(&[("A", Some(0.0), "%"), ("B", Some(5.0), "%"), ("C", Some(10.0), "%")]);
        let s = summarize(&ds).unwrap();
        assert_eq!(s.highest, CityValue { city: "C".into(), value: 10.0 });
        assert_eq!(s.lowest, Some(CityValue { city: "B".into(), value: 5.0 }));
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.unit_text, "%");
    }

    #[test]
    fn test_all_zero_reuses_highest() {
        let ds = dataset(&[("A", Some(0.0), ""), ("B", Some(0.0), "")]);
        let s = summarize(&ds).unwrap();
        assert_eq!(s.highest, CityValue { city: "A".into(), value: 0.0 });
        assert_eq!(s.lowest.as_ref(), Some(&s.highest));
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.unit_text, "");
    }

    #[test]
    fn test_zeros_and_nulls_have_no_lowest() {
        let ds = dataset(&[("A", Some(0.0), "%"), ("B", None, "%")]);
        let s = summarize(&ds).unwrap();
        assert_eq!(s.highest.city, "A");
        assert_eq!(s.lowest, None);
        assert_eq!(s.mean, 0.0);
    }

    #[test]
    fn test_ties_pick_first_occurrence() {
        let ds = dataset(&[
            ("A", Some(2.0), "Rs"),
            ("B", Some(9.0), "Rs"),
            ("C", Some(9.0), "Rs"),
            ("D", Some(2.0), "Rs"),
        ]);
        let s = summarize(&ds).unwrap();
        assert_eq!(s.highest.city, "B");
        assert_eq!(s.lowest.unwrap().city, "A");
    }

    #[test]
    fn test_negative_values_count_as_non_zero() {
        let ds = dataset(&[("A", Some(-3.0), "%"), ("B", Some(0.0), "%"), ("C", Some(4.0), "%")]);
        let s = summarize(&ds).unwrap();
        assert_eq!(s.lowest.unwrap().value, -3.0);
        assert!((s.mean - (1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_mean_ignores_nulls_and_row_order() {
        let forward = dataset(&[("A", Some(1.0), "%"), ("B", None, "%"), ("C", Some(2.0), "%"), ("D", Some(6.0), "%")]);
        let reversed = dataset(&[("D", Some(6.0), "%"), ("C", Some(2.0), "%"), ("B", None, "%"), ("A", Some(1.0), "%")]);
        assert_eq!(summarize(&forward).unwrap().mean, 3.0);
        assert_eq!(summarize(&reversed).unwrap().mean, 3.0);
    }

    #[test]
    fn test_distinct_units_are_joined() {
        let ds = dataset(&[("A", Some(1.0), "Rs Crore"), ("B", Some(2.0), "Rs Lakh"), ("C", Some(3.0), "Rs Crore")]);
        assert_eq!(summarize(&ds).unwrap().unit_text, "Rs Crore, Rs Lakh");
    }

    #[test]
    fn test_no_values_is_no_data() {
        let ds = dataset(&[("A", None, "%"), ("B", None, "%")]);
        assert!(matches!(summarize(&ds), Err(DecodeError::NoData(name)) if name == "Test Indicator (2020-21)"));

        let empty = dataset(&[]);
        assert!(matches!(summarize(&empty), Err(DecodeError::NoData(_))));
    }
}
