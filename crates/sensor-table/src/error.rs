//! Table Construction Errors

use thiserror::Error;

/// Errors raised while building a [`crate::SensorTable`].
#[derive(Debug, Clone, Error)]
pub enum TableError {
    /// Table has no rows at all.
    #[error("table has no samples")]
    Empty,

    /// Timestamps must be strictly increasing.
    #[error("timestamp at row {row} does not increase over the previous row")]
    NonMonotonicTimestamp { row: usize },

    /// A channel column does not match the timestamp column length.
    #[error("column '{name}' has {len} values, expected {expected}")]
    LengthMismatch {
        name: String,
        len: usize,
        expected: usize,
    },

    /// NaN or infinite reading; the ingestion layer fills gaps upstream.
    #[error("column '{name}' has a non-finite value at row {row}")]
    NonFiniteValue { name: String, row: usize },

    /// Two columns share a name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },
}
