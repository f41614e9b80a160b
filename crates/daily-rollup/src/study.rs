//! Study Window Computation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The calendar span of one household's dataset: the first sample instant
/// and the number of study days it covers. Computed once per study and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyWindow {
    start: DateTime<Utc>,
    days: u32,
}

impl StudyWindow {
    /// Build the window from the first and last sample instants. The day
    /// count is the fractional span rounded up, never less than one.
    pub fn new(first: DateTime<Utc>, last: DateTime<Utc>) -> Self {
        let span_seconds = (last - first).num_seconds().max(0) as f64;
        let days = (span_seconds / SECONDS_PER_DAY).ceil() as u32;
        Self {
            start: first,
            days: days.max(1),
        }
    }

    /// Study start instant.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Number of calendar days in the study.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Calendar day an instant falls on, 1-based from the study start.
    /// Instants at the exact closing boundary clamp into the final day, so
    /// the result always sits in `1..=days`.
    pub fn day_of(&self, instant: DateTime<Utc>) -> u32 {
        let offset_seconds = (instant - self.start).num_seconds().max(0) as f64;
        let day = (offset_seconds / SECONDS_PER_DAY).floor() as u32 + 1;
        day.min(self.days)
    }
}
