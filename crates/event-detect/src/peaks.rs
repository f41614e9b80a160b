//! Greedy Peak Picking

use tracing::debug;

/// Find local-maximum indices that clear `min_height`, keeping no two
/// selections closer than `min_distance` samples.
///
/// A sample is a candidate when the sequence rises into it and does not rise
/// leaving it, so a flat plateau contributes exactly one candidate (its left
/// edge). Candidates are ranked by height (ties broken toward the earlier
/// index) and selected greedily; anything inside an already-selected peak's
/// exclusion window is suppressed. The result is sorted ascending.
///
/// Returns an empty vector when nothing clears the threshold.
pub fn find_peaks(values: &[f64], min_height: f64, min_distance: usize) -> Vec<usize> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<usize> = Vec::new();
    for i in 0..n {
        let rising_in = i == 0 || values[i] > values[i - 1];
        let falling_out = i == n - 1 || values[i] >= values[i + 1];
        if rising_in && falling_out && values[i] >= min_height {
            candidates.push(i);
        }
    }

    // Height-descending, index-ascending on ties.
    candidates.sort_by(|&a, &b| {
        values[b].partial_cmp(&values[a]).unwrap().then(a.cmp(&b))
    });

    let mut selected: Vec<usize> = Vec::new();
    for &idx in &candidates {
        let blocked = selected
            .iter()
            .any(|&kept| idx.abs_diff(kept) < min_distance);
        if blocked {
            debug!(index = idx, "peak suppressed by spacing constraint");
            continue;
        }
        selected.push(idx);
    }

    selected.sort_unstable();
    selected
}
