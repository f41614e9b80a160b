//! Day-Bucketing Aggregators

use crate::StudyWindow;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::warn;

/// Per-day magnitudes keyed by study day. Day 0 is the aggregate bucket;
/// every day in `1..=study_days` is present, zero-filled when idle.
pub type DaySeries = BTreeMap<u32, f64>;

fn zero_filled(window: &StudyWindow) -> DaySeries {
    (0..=window.days()).map(|day| (day, 0.0)).collect()
}

/// Sum cooking intervals into minutes per study day.
///
/// An interval is credited in full to the day its start sample falls on; an
/// event cooking across midnight is not split. Day 0 holds the sum of all
/// calendar days.
pub fn daily_cooking_minutes(
    window: &StudyWindow,
    timestamps: &[DateTime<Utc>],
    intervals: &[(usize, usize)],
) -> DaySeries {
    let mut series = zero_filled(window);

    for &(start, end) in intervals {
        let (Some(started), Some(ended)) = (timestamps.get(start), timestamps.get(end)) else {
            warn!(start, end, rows = timestamps.len(), "interval outside table, skipped");
            continue;
        };
        let minutes = (*ended - *started).num_seconds() as f64 / 60.0;
        let day = window.day_of(*started);
        *series.entry(day).or_insert(0.0) += minutes;
    }

    let total: f64 = series
        .iter()
        .filter(|(day, _)| **day > 0)
        .map(|(_, minutes)| minutes)
        .sum();
    series.insert(0, total);

    series
}

/// Sum fuel weight drops into kilograms per study day.
///
/// Each consecutive change-point pair contributes `w[previous] - w[current]`
/// to the day of the later point; a non-positive delta is a refill and is
/// skipped, never subtracted. Day 0 holds the net first-minus-last weight
/// delta across the whole change list, which differs from the sum of daily
/// drops whenever a refill happened mid-study.
pub fn daily_fuel_kilograms(
    window: &StudyWindow,
    timestamps: &[DateTime<Utc>],
    weights: &[f64],
    changes: &[usize],
) -> DaySeries {
    let mut series = zero_filled(window);

    for pair in changes.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        let (Some(instant), Some(&before), Some(&after)) = (
            timestamps.get(current),
            weights.get(previous),
            weights.get(current),
        ) else {
            warn!(previous, current, rows = timestamps.len(), "change point outside table, skipped");
            continue;
        };
        let used = before - after;
        if used <= 0.0 {
            continue;
        }
        let day = window.day_of(*instant);
        *series.entry(day).or_insert(0.0) += used;
    }

    if let (Some(&first), Some(&last)) = (changes.first(), changes.last()) {
        if let (Some(&opening), Some(&closing)) = (weights.get(first), weights.get(last)) {
            series.insert(0, opening - closing);
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// 1-minute cadence timestamps starting at midnight.
    fn minute_stamps(count: usize) -> Vec<DateTime<Utc>> {
        let start = Utc.with_ymd_and_hms(2018, 8, 26, 0, 0, 0).unwrap();
        (0..count)
            .map(|i| start + chrono::Duration::minutes(i as i64))
            .collect()
    }

    fn three_day_window(stamps: &[DateTime<Utc>]) -> StudyWindow {
        StudyWindow::new(stamps[0], stamps[stamps.len() - 1])
    }

    #[test]
    fn test_cooking_minutes_single_event() {
        let stamps = minute_stamps(3 * 1440);
        let window = three_day_window(&stamps);
        // 45-minute burn starting at noon on day 2.
        let start = 1440 + 720;
        let series = daily_cooking_minutes(&window, &stamps, &[(start, start + 45)]);

        assert_eq!(series.len(), 4);
        assert_eq!(series[&0], 45.0);
        assert_eq!(series[&1], 0.0);
        assert_eq!(series[&2], 45.0);
        assert_eq!(series[&3], 0.0);
    }

    #[test]
    fn test_cooking_minutes_day_zero_is_daily_sum() {
        let stamps = minute_stamps(3 * 1440);
        let window = three_day_window(&stamps);
        let intervals = [(100, 130), (1500, 1560), (3000, 3025)];
        let series = daily_cooking_minutes(&window, &stamps, &intervals);

        let daily_sum: f64 = (1..=window.days()).map(|d| series[&d]).sum();
        assert_eq!(series[&0], daily_sum);
        assert_eq!(series[&1], 30.0);
        assert_eq!(series[&2], 60.0);
        assert_eq!(series[&3], 25.0);
    }

    #[test]
    fn test_cooking_interval_crossing_midnight_stays_on_start_day() {
        let stamps = minute_stamps(2 * 1440);
        let window = StudyWindow::new(stamps[0], stamps[stamps.len() - 1]);
        // Starts 23:50 on day 1, ends 00:20 on day 2.
        let series = daily_cooking_minutes(&window, &stamps, &[(1430, 1460)]);

        assert_eq!(series[&1], 30.0);
        assert_eq!(series[&2], 0.0);
    }

    #[test]
    fn test_cooking_no_events_all_days_zero() {
        let stamps = minute_stamps(3 * 1440);
        let window = three_day_window(&stamps);
        let series = daily_cooking_minutes(&window, &stamps, &[]);

        assert_eq!(series.len(), 4);
        assert!(series.values().all(|&minutes| minutes == 0.0));
    }

    #[test]
    fn test_fuel_single_drop() {
        let stamps = minute_stamps(3 * 1440);
        let window = three_day_window(&stamps);
        let mut weights = vec![10.0; stamps.len()];
        for w in weights.iter_mut().skip(600) {
            *w = 7.0;
        }
        let series = daily_fuel_kilograms(&window, &stamps, &weights, &[0, 600]);

        assert_eq!(series.len(), 4);
        assert_eq!(series[&0], 3.0);
        assert_eq!(series[&1], 3.0);
        assert_eq!(series[&2], 0.0);
        assert_eq!(series[&3], 0.0);
    }

    #[test]
    fn test_fuel_refill_not_subtracted() {
        let stamps = minute_stamps(3 * 1440);
        let window = three_day_window(&stamps);
        // 12 kg, down to 8 on day 1, refilled to 20 on day 2, down to 15 on day 3.
        let mut weights = vec![12.0; stamps.len()];
        for w in weights.iter_mut().skip(700) {
            *w = 8.0;
        }
        for w in weights.iter_mut().skip(2000) {
            *w = 20.0;
        }
        for w in weights.iter_mut().skip(3200) {
            *w = 15.0;
        }
        let changes = [0, 700, 2000, 3200];
        let series = daily_fuel_kilograms(&window, &stamps, &weights, &changes);

        assert_eq!(series[&1], 4.0);
        assert_eq!(series[&2], 0.0);
        assert_eq!(series[&3], 5.0);
        // Net delta convention: opening 12 minus closing 15.
        assert_eq!(series[&0], -3.0);
    }

    #[test]
    fn test_fuel_day_zero_net_delta_formula() {
        let stamps = minute_stamps(2 * 1440);
        let window = StudyWindow::new(stamps[0], stamps[stamps.len() - 1]);
        let mut weights = vec![9.0; stamps.len()];
        for w in weights.iter_mut().skip(300) {
            *w = 7.5;
        }
        for w in weights.iter_mut().skip(1800) {
            *w = 6.0;
        }
        let changes = [0, 300, 1800];
        let series = daily_fuel_kilograms(&window, &stamps, &weights, &changes);

        assert_eq!(series[&0], weights[changes[0]] - weights[changes[2]]);
        assert_eq!(series[&0], 3.0);
    }

    #[test]
    fn test_fuel_empty_changes_zero_filled() {
        let stamps = minute_stamps(1440);
        let window = StudyWindow::new(stamps[0], stamps[stamps.len() - 1]);
        let weights = vec![10.0; stamps.len()];
        let series = daily_fuel_kilograms(&window, &stamps, &weights, &[]);

        assert_eq!(series.len(), 2);
        assert_eq!(series[&0], 0.0);
        assert_eq!(series[&1], 0.0);
    }
}
