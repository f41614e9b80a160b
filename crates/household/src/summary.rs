//! Daily Summary Tables

use daily_rollup::DaySeries;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rows-by-days summary: one [`DaySeries`] per channel, all covering
/// `0..=study_days`. Row labels carry the unit suffix the study reports
/// always used ("wood fuel(kg)", "telia temp(min)").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    unit: String,
    study_days: u32,
    columns: BTreeMap<String, DaySeries>,
}

impl SummaryTable {
    pub(crate) fn new(unit: &str, study_days: u32) -> Self {
        Self {
            unit: unit.to_string(),
            study_days,
            columns: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, channel: &str, series: DaySeries) {
        self.columns.insert(channel.to_string(), series);
    }

    /// Unit suffix for this table ("min" or "kg").
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Number of calendar study days (day 0 excluded).
    pub fn study_days(&self) -> u32 {
        self.study_days
    }

    /// Raw channel names, sorted.
    pub fn channels(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Report labels, unit-suffixed.
    pub fn labels(&self) -> Vec<String> {
        self.columns
            .keys()
            .map(|name| format!("{}({})", name, self.unit))
            .collect()
    }

    /// The full day series for one channel.
    pub fn series(&self, channel: &str) -> Option<&DaySeries> {
        self.columns.get(channel)
    }

    /// One cell: a channel's magnitude on one study day (0 = total).
    pub fn value(&self, channel: &str, day: u32) -> Option<f64> {
        self.columns.get(channel).and_then(|s| s.get(&day)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> SummaryTable {
        let mut table = SummaryTable::new("min", 2);
        let series: DaySeries = [(0, 30.0), (1, 30.0), (2, 0.0)].into_iter().collect();
        table.insert("telia temp", series);
        table
    }

    #[test]
    fn test_labels_carry_unit_suffix() {
        let table = sample_table();
        assert_eq!(table.labels(), vec!["telia temp(min)"]);
    }

    #[test]
    fn test_cell_lookup() {
        let table = sample_table();
        assert_eq!(table.value("telia temp", 1), Some(30.0));
        assert_eq!(table.value("telia temp", 3), None);
        assert_eq!(table.value("missing", 0), None);
    }
}
