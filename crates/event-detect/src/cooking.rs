//! Cooking Event Boundary Search

use crate::DetectError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Consecutive below-threshold samples required before a boundary is
/// declared. Brief dips during a burn (stirring, refuelling the firebox)
/// must not split one cooking event in two.
pub const MIN_BELOW_RUN: usize = 5;

/// One bounded cooking event on a stove channel, expressed as row indices
/// into the sensor table. `start < peak < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingEvent {
    pub start: usize,
    pub peak: usize,
    pub end: usize,
}

/// Turn temperature peaks into bounded `[start, peak, end]` intervals.
///
/// For each peak (ascending) the search walks outward until it has counted
/// [`MIN_BELOW_RUN`] consecutive samples below `temp_threshold`; the boundary
/// is declared where that run completes. An above-threshold sample resets the
/// run. Walking off either edge of the sequence falls back to that edge.
///
/// Two events that run together overlap: the later event's computed start can
/// land inside the earlier event. The start is then clamped to one sample
/// past the earlier event's end and both events are kept; the event is
/// dropped only when clamping would leave no room before its own peak.
pub fn extract_cooking_events(
    values: &[f64],
    peaks: &[usize],
    temp_threshold: f64,
) -> Result<Vec<CookingEvent>, DetectError> {
    let n = values.len();
    let mut events: Vec<CookingEvent> = Vec::with_capacity(peaks.len());

    for &peak in peaks {
        if n == 0 || peak >= n {
            return Err(DetectError::BoundaryNotFound { peak, len: n });
        }

        let mut start = search_backward(values, peak, temp_threshold);
        let end = search_forward(values, peak, temp_threshold);

        if let Some(previous) = events.last() {
            if start <= previous.end {
                debug!(
                    peak,
                    start,
                    previous_end = previous.end,
                    "overlapping cooking events, clamping start"
                );
                start = previous.end + 1;
            }
        }

        if start >= peak || end <= peak {
            // A previous event swallowed this peak, or the peak sits on the
            // sequence edge; no valid interval exists.
            warn!(peak, start, end, "dropping cooking event with degenerate bounds");
            continue;
        }

        events.push(CookingEvent { start, peak, end });
    }

    Ok(events)
}

/// Walk backward from `peak` until [`MIN_BELOW_RUN`] consecutive samples sit
/// below the threshold, returning the index where the run completes, or 0
/// when the walk reaches the sequence start first.
fn search_backward(values: &[f64], peak: usize, temp_threshold: f64) -> usize {
    let mut run = 0usize;
    for j in (0..peak).rev() {
        if values[j] < temp_threshold {
            run += 1;
            if run == MIN_BELOW_RUN {
                return j;
            }
        } else {
            run = 0;
        }
    }
    0
}

/// Forward twin of [`search_backward`]; falls back to the last index.
fn search_forward(values: &[f64], peak: usize, temp_threshold: f64) -> usize {
    let n = values.len();
    let mut run = 0usize;
    for j in peak + 1..n {
        if values[j] < temp_threshold {
            run += 1;
            if run == MIN_BELOW_RUN {
                return j;
            }
        } else {
            run = 0;
        }
    }
    n - 1
}
