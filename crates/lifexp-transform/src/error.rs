//! Error types for cleaning.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the strategy relies on is absent.
    #[error("column '{column}' not found")]
    MissingColumn { column: String },

    /// A composite key did not split into the expected number of fields.
    #[error("malformed key '{key}' in row {row}: expected {expected} fields, found {found}")]
    MalformedKey {
        row: usize,
        key: String,
        expected: usize,
        found: usize,
    },

    /// A cleaned cell does not hold the expected type.
    #[error("unexpected value in column '{column}' at row {row}")]
    ColumnType { column: String, row: usize },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
