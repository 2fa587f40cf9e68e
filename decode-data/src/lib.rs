//! Data processing for selected indicators.
//!
//! This crate turns loaded indicator datasets into the descriptive output
//! shown next to the map: highest/lowest cities and the mean (`summary`),
//! static definitions (`description`), and tracks which indicators the
//! user has toggled on (`selection`).

pub mod description;
pub mod selection;
pub mod summary;

pub use description::{Description, DescriptionTable};
pub use selection::SelectionSet;
pub use summary::{summarize, CityValue, IndicatorSummary};
