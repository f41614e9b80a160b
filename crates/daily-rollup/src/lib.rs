//! Daily Rollup
//!
//! Buckets irregular event lists into per-calendar-day totals relative to the
//! study start. Two instantiations share the bucketing pattern: cooking
//! intervals summed as minutes, and fuel weight deltas summed as kilograms.
//! Day 0 is the aggregate bucket; days 1..=N are zero-filled calendar days.

mod rollup;
mod study;

pub use rollup::{daily_cooking_minutes, daily_fuel_kilograms, DaySeries};
pub use study::StudyWindow;
