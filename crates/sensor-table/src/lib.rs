//! Time-Indexed Sensor Table
//!
//! Provides the immutable, typed table that the detection and rollup crates
//! read: one strictly increasing timestamp column plus one numeric column per
//! sensor channel (a stove's surface temperature or a fuel container's
//! weight). Construction validates the invariants once; everything downstream
//! is read-only.

mod error;
mod table;

pub use error::TableError;
pub use table::SensorTable;

use serde::{Deserialize, Serialize};

/// Classification of a sensor channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Stove surface temperature, degrees Celsius.
    Stove,
    /// Fuel container weight, kilograms.
    Fuel,
}

impl ChannelKind {
    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Stove => "stove",
            ChannelKind::Fuel => "fuel",
        }
    }
}
