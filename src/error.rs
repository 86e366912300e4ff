//! Error types for the tablecast library

use thiserror::Error;

/// Result type alias for tablecast operations
pub type Result<T> = std::result::Result<T, SheetError>;

/// Main error type for sheet assembly
///
/// All failures are deterministic caller configuration errors. There is no
/// transient case and no retry path: a failed build emits nothing into the
/// sink and should be treated as wholly failed.
#[derive(Error, Debug)]
pub enum SheetError {
    /// A configured `columns` or `headers` value has the wrong shape
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A column specification node is neither a field name, a mapping, nor a list
    #[error("Column spec {value} has an invalid shape ({shape})")]
    InvalidColumnSpec { value: String, shape: String },
}
