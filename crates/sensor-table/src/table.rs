//! Sensor Table Implementation

use crate::TableError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One named numeric sensor stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// Immutable table of sensor samples: a strictly increasing timestamp column
/// plus one numeric column per channel.
///
/// The ingestion collaborator builds one of these per household log file and
/// hands it to the engine; nothing here mutates after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorTable {
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl SensorTable {
    /// Build a table from a timestamp column and named channel columns,
    /// validating every invariant the engine later relies on.
    pub fn new(
        timestamps: Vec<DateTime<Utc>>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self, TableError> {
        if timestamps.is_empty() {
            return Err(TableError::Empty);
        }

        for (row, pair) in timestamps.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(TableError::NonMonotonicTimestamp { row: row + 1 });
            }
        }

        let expected = timestamps.len();
        let mut built: Vec<Column> = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            if built.iter().any(|c| c.name == name) {
                return Err(TableError::DuplicateColumn { name });
            }
            if values.len() != expected {
                return Err(TableError::LengthMismatch {
                    len: values.len(),
                    expected,
                    name,
                });
            }
            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(TableError::NonFiniteValue { name, row });
            }
            built.push(Column { name, values });
        }

        Ok(Self {
            timestamps,
            columns: built,
        })
    }

    /// Number of sample rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True if the table holds no rows. Construction rejects this, so the
    /// method exists only to satisfy the usual len/is_empty pairing.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Timestamp column.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Timestamp of one row.
    pub fn timestamp(&self, row: usize) -> Option<DateTime<Utc>> {
        self.timestamps.get(row).copied()
    }

    /// First sample instant.
    pub fn first_timestamp(&self) -> DateTime<Utc> {
        self.timestamps[0]
    }

    /// Last sample instant.
    pub fn last_timestamp(&self) -> DateTime<Utc> {
        self.timestamps[self.timestamps.len() - 1]
    }

    /// Values of a named channel, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Whether a channel column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Channel names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
