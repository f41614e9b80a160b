//! Event Detection Engine
//!
//! Pure detection algorithms over raw sensor sequences:
//! - Greedy peak picking with height and spacing constraints
//! - Cooking-event boundary search around temperature peaks
//! - Fuel weight-change detection with noise and refill disambiguation
//!
//! Everything here operates on `&[f64]` slices and row indices; timestamps
//! and calendar bucketing belong to the rollup crate.

mod cooking;
mod fuel;
mod peaks;

pub use cooking::{extract_cooking_events, CookingEvent, MIN_BELOW_RUN};
pub use fuel::{find_weight_changes, CYLINDER_FLOOR_KG};
pub use peaks::find_peaks;

use thiserror::Error;

/// Detection error types
#[derive(Debug, Clone, Error)]
pub enum DetectError {
    /// Boundary search could not resolve an interval around a peak. The
    /// edge-of-sequence fallbacks make this unreachable on well-formed
    /// input; it guards against a peak index outside the sequence.
    #[error("no event boundary found around peak index {peak} (sequence length {len})")]
    BoundaryNotFound { peak: usize, len: usize },
}
