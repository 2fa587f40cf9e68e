/// Error types for the dashboard libraries
use thiserror::Error;

/// Main error type for catalog, summary and composition operations.
///
/// The per-indicator variants (`NotFound`, `NoData`, `MissingDescription`)
/// render as the inline message shown for that indicator; they never abort
/// a render pass.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// No backing entry exists for the requested indicator
    #[error("No data available for {0}.")]
    NotFound(String),

    /// The dataset exists but has no non-null `Result` values
    #[error("No data available for {0}.")]
    NoData(String),

    /// No static description is registered for the indicator
    #[error("No description available for {0}.")]
    MissingDescription(String),

    /// Required columns are absent from a dataset
    #[error("Dataset {source_name} is missing required column(s): {}", missing.join(", "))]
    Schema {
        source_name: String,
        missing: Vec<String>,
    },

    /// Malformed static configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read from the backing store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a JSON document
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// True for the errors that are reported inline for one indicator
    /// rather than failing the whole process.
    pub fn is_per_indicator(&self) -> bool {
        matches!(
            self,
            DecodeError::NotFound(_)
                | DecodeError::NoData(_)
                | DecodeError::MissingDescription(_)
                | DecodeError::Schema { .. }
                | DecodeError::Csv(_)
        )
    }
}

/// Type alias for Results using DecodeError
pub type Result<T> = std::result::Result<T, DecodeError>;
