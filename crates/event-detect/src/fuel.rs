//! Fuel Weight-Change Detection

use tracing::debug;

/// Weight floor for refillable gas cylinders, kilograms. Cylinder load cells
/// read garbage once the bottle is nearly empty; anything below this is
/// ignored outright.
pub const CYLINDER_FLOOR_KG: f64 = 10.0;

/// Whether a fuel channel is a refillable gas cylinder, keyed off the
/// channel naming convention used by the study loggers.
fn is_cylinder(name: &str) -> bool {
    name.to_lowercase().contains("lpg")
}

/// Find the indices where a fuel-weight sequence steps by at least
/// `weight_threshold`, suppressing sensor noise and single-sample spikes.
///
/// The scan keeps a running reference weight, initialized to the first
/// sample; the returned list always begins with index 0 (the initial
/// reference). Usage decreases weight, so a downward step is consumption.
/// An upward step is accepted only when sustained (a genuine refill — the
/// aggregator excludes it from usage); a transient up-spike whose
/// neighbourhood settles back is ignored. If the final sample sits below the
/// last accepted reference, the final index is appended even when the step
/// never crossed the threshold mid-scan.
///
/// Returns an empty vector for an empty sequence; indices are strictly
/// increasing.
pub fn find_weight_changes(name: &str, values: &[f64], weight_threshold: f64) -> Vec<usize> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let cylinder = is_cylinder(name);
    let mut reference = values[0];
    let mut changes: Vec<usize> = vec![0];

    for i in 1..n {
        let current = values[i];

        if cylinder && current < CYLINDER_FLOOR_KG {
            debug!(channel = name, index = i, value = current, "below cylinder floor, ignored");
            continue;
        }

        let diff = current - reference;
        if diff.abs() < weight_threshold {
            continue;
        }

        if diff > 0.0 && i + 1 < n {
            let before = values[i - 1];
            let after = values[i + 1];
            if (after - before).abs() < weight_threshold || after < before {
                debug!(channel = name, index = i, "transient weight spike, ignored");
                continue;
            }
        }

        changes.push(i);
        reference = current;
    }

    // A slow drain at the tail can stay under the threshold sample-to-sample;
    // the final reading still counts as a change if fuel was consumed.
    let last = n - 1;
    if values[last] < reference && changes.last() != Some(&last) {
        changes.push(last);
    }

    changes
}
