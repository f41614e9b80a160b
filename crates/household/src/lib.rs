//! Household Facade
//!
//! Owns one study's sensor table, channel classification, and detection
//! thresholds, and exposes the per-stove/per-fuel summary API:
//! - `cooking_events` / `cooking_event_intervals` — peak-anchored cooking
//!   intervals per stove
//! - `cooking_duration` — minutes of cooking per stove per study day
//! - `fuel_change_points` / `fuel_usage` — significant weight changes and
//!   kilograms consumed per fuel per study day
//!
//! Extraction results are returned directly and recomputed per call; the
//! facade keeps no mutable derived state, so every operation takes `&self`
//! and identical inputs always produce identical outputs.

mod config;
mod selector;
mod summary;

pub use config::Thresholds;
pub use selector::ChannelSelector;
pub use summary::SummaryTable;

pub use daily_rollup::{DaySeries, StudyWindow};
pub use event_detect::CookingEvent;
pub use sensor_table::{ChannelKind, SensorTable, TableError};

use daily_rollup::{daily_cooking_minutes, daily_fuel_kilograms};
use event_detect::{extract_cooking_events, find_peaks, find_weight_changes, DetectError};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

/// Household error types
#[derive(Debug, Clone, Error)]
pub enum HouseholdError {
    /// Malformed constructor arguments.
    #[error("configuration error: {0}")]
    Config(String),

    /// Selector references a channel outside the declared set.
    #[error("unknown {kind} channel '{name}'")]
    UnknownChannel { name: String, kind: &'static str },

    /// A name resolves to both a stove and a fuel. Construction enforces
    /// disjoint sets, so this is a defensive check only.
    #[error("channel '{name}' is declared as both a stove and a fuel")]
    AmbiguousSelector { name: String },

    /// Sensor table construction failure, surfaced through the facade.
    #[error("invalid sensor table: {0}")]
    Table(#[from] TableError),

    /// Event detection failure (defensive; see `DetectError`).
    #[error("event detection failed: {0}")]
    Detect(#[from] DetectError),
}

/// One household study: the sensor table, the stove/fuel classification,
/// the thresholds, and the study window derived from the table's span.
#[derive(Debug, Clone)]
pub struct Household {
    table: SensorTable,
    stoves: Vec<String>,
    fuels: Vec<String>,
    thresholds: Thresholds,
    window: StudyWindow,
}

impl Household {
    /// Build a household from an ingested table, the channel classification,
    /// and the study thresholds. Fails with [`HouseholdError::Config`] when a
    /// declared channel is missing from the table, the stove and fuel sets
    /// overlap, no channels are declared, or a threshold is negative.
    pub fn new(
        table: SensorTable,
        stoves: Vec<String>,
        fuels: Vec<String>,
        thresholds: Thresholds,
    ) -> Result<Self, HouseholdError> {
        if let Some(reason) = thresholds.invalid_reason() {
            return Err(HouseholdError::Config(reason));
        }
        if stoves.is_empty() && fuels.is_empty() {
            return Err(HouseholdError::Config(
                "at least one stove or fuel channel must be declared".to_string(),
            ));
        }
        for name in stoves.iter().chain(fuels.iter()) {
            if !table.has_column(name) {
                return Err(HouseholdError::Config(format!(
                    "declared channel '{name}' is not a table column"
                )));
            }
        }
        if let Some(shared) = stoves.iter().find(|name| fuels.contains(name)) {
            return Err(HouseholdError::Config(format!(
                "channel '{shared}' is declared as both a stove and a fuel"
            )));
        }

        let window = StudyWindow::new(table.first_timestamp(), table.last_timestamp());
        info!(
            stoves = stoves.len(),
            fuels = fuels.len(),
            study_days = window.days(),
            "household study loaded"
        );

        Ok(Self {
            table,
            stoves,
            fuels,
            thresholds,
            window,
        })
    }

    /// The study window computed from the table span.
    pub fn window(&self) -> StudyWindow {
        self.window
    }

    /// Declared stove channels.
    pub fn stoves(&self) -> &[String] {
        &self.stoves
    }

    /// Declared fuel channels.
    pub fn fuels(&self) -> &[String] {
        &self.fuels
    }

    /// Resolve a selector against the declared channels of one kind.
    ///
    /// `All` yields every declared channel; names are checked for membership
    /// and for the (structurally impossible) stove/fuel double classification.
    pub fn check_channel(
        &self,
        selector: &ChannelSelector,
        kind: ChannelKind,
    ) -> Result<Vec<String>, HouseholdError> {
        let declared = match kind {
            ChannelKind::Stove => &self.stoves,
            ChannelKind::Fuel => &self.fuels,
        };

        let Some(requested) = selector.requested() else {
            return Ok(declared.clone());
        };

        let mut resolved = Vec::with_capacity(requested.len());
        for name in requested {
            if self.stoves.iter().any(|s| s == name) && self.fuels.iter().any(|f| f == name) {
                return Err(HouseholdError::AmbiguousSelector {
                    name: name.to_string(),
                });
            }
            if !declared.iter().any(|d| d == name) {
                return Err(HouseholdError::UnknownChannel {
                    name: name.to_string(),
                    kind: kind.label(),
                });
            }
            resolved.push(name.to_string());
        }
        Ok(resolved)
    }

    /// Extract the bounded cooking intervals for the selected stoves.
    pub fn cooking_event_intervals(
        &self,
        selector: &ChannelSelector,
    ) -> Result<BTreeMap<String, Vec<CookingEvent>>, HouseholdError> {
        let mut intervals = BTreeMap::new();
        for stove in self.check_channel(selector, ChannelKind::Stove)? {
            let values = self.column(&stove, ChannelKind::Stove)?;
            let peaks = find_peaks(
                values,
                self.thresholds.temp_threshold,
                self.thresholds.min_event_gap,
            );
            let events = extract_cooking_events(values, &peaks, self.thresholds.temp_threshold)?;
            debug!(stove = %stove, events = events.len(), "cooking events extracted");
            intervals.insert(stove, events);
        }
        Ok(intervals)
    }

    /// Count cooking events per selected stove.
    pub fn cooking_events(
        &self,
        selector: &ChannelSelector,
    ) -> Result<BTreeMap<String, usize>, HouseholdError> {
        Ok(self
            .cooking_event_intervals(selector)?
            .into_iter()
            .map(|(stove, events)| (stove, events.len()))
            .collect())
    }

    /// Minutes of cooking per selected stove per study day.
    pub fn cooking_duration(
        &self,
        selector: &ChannelSelector,
    ) -> Result<SummaryTable, HouseholdError> {
        let mut table = SummaryTable::new("min", self.window.days());
        for (stove, events) in self.cooking_event_intervals(selector)? {
            let pairs: Vec<(usize, usize)> =
                events.iter().map(|e| (e.start, e.end)).collect();
            let series = daily_cooking_minutes(&self.window, self.table.timestamps(), &pairs);
            table.insert(&stove, series);
        }
        Ok(table)
    }

    /// Significant weight-change indices for the selected fuels.
    pub fn fuel_change_points(
        &self,
        selector: &ChannelSelector,
    ) -> Result<BTreeMap<String, Vec<usize>>, HouseholdError> {
        let mut points = BTreeMap::new();
        for fuel in self.check_channel(selector, ChannelKind::Fuel)? {
            let weights = self.column(&fuel, ChannelKind::Fuel)?;
            let changes = find_weight_changes(&fuel, weights, self.thresholds.weight_threshold);
            debug!(fuel = %fuel, changes = changes.len(), "weight changes extracted");
            points.insert(fuel, changes);
        }
        Ok(points)
    }

    /// Kilograms of fuel consumed per selected fuel per study day.
    pub fn fuel_usage(&self, selector: &ChannelSelector) -> Result<SummaryTable, HouseholdError> {
        let mut table = SummaryTable::new("kg", self.window.days());
        for (fuel, changes) in self.fuel_change_points(selector)? {
            let weights = self.column(&fuel, ChannelKind::Fuel)?;
            let series = daily_fuel_kilograms(
                &self.window,
                self.table.timestamps(),
                weights,
                &changes,
            );
            table.insert(&fuel, series);
        }
        Ok(table)
    }

    /// Column values for a declared channel. Construction guarantees the
    /// column exists; the error path guards against table drift.
    fn column(&self, name: &str, kind: ChannelKind) -> Result<&[f64], HouseholdError> {
        self.table
            .column(name)
            .ok_or_else(|| HouseholdError::UnknownChannel {
                name: name.to_string(),
                kind: kind.label(),
            })
    }
}
