//! Indicator naming helpers.
//!
//! Indicator names are derived from backing-store entry names by stripping
//! the tabular-data suffix, e.g. `"Total Number of MSME Clusters in the City (2020-21).csv"`
//! becomes `"Total Number of MSME Clusters in the City (2020-21)"`.

/// Suffix identifying tabular indicator entries in a backing store.
pub const CSV_SUFFIX: &str = ".csv";

/// Strip the `.csv` suffix from an entry name.
///
/// Returns `None` for entries that are not tabular data (or are nothing
/// but the suffix).
pub fn indicator_name_from_entry(entry: &str) -> Option<&str> {
    entry
        .strip_suffix(CSV_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// Split an indicator name into its base name and optional reporting period.
///
/// The split happens on the first `(`; both parts are trimmed and the
/// closing `)` of the period is dropped.
///
/// ```
/// use decode_core::name::split_indicator_name;
///
/// assert_eq!(
///     split_indicator_name("Cluster Strength (2021)"),
///     ("Cluster Strength", Some("2021"))
/// );
/// assert_eq!(split_indicator_name("Cluster Strength"), ("Cluster Strength", None));
/// ```
pub fn split_indicator_name(name: &str) -> (&str, Option<&str>) {
    match name.split_once('(') {
        Some((base, rest)) => {
            let period = rest.split(')').next().unwrap_or("").trim();
            let period = if period.is_empty() { None } else { Some(period) };
            (base.trim(), period)
        }
        None => (name.trim(), None),
    }
}

/// The description lookup key: the name with its parenthesized suffix removed.
pub fn base_name(name: &str) -> &str {
    split_indicator_name(name).0
}

/// Filesystem-friendly slug for output file names.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
