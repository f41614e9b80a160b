//! Study Threshold Configuration

use serde::{Deserialize, Serialize};

/// Detection thresholds for one household study.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Temperature a stove must clear to count as cooking (°C).
    pub temp_threshold: f64,

    /// Minimum spacing between cooking peaks, in samples. The study loggers
    /// sample once a minute, so the default keeps peaks an hour apart.
    pub min_event_gap: usize,

    /// Weight step a fuel reading must clear to count as a change (kg).
    pub weight_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temp_threshold: 15.0,
            min_event_gap: 60,
            weight_threshold: 0.2,
        }
    }
}

impl Thresholds {
    /// Reason the configuration is invalid, if any.
    pub(crate) fn invalid_reason(&self) -> Option<String> {
        if !self.temp_threshold.is_finite() || self.temp_threshold < 0.0 {
            return Some(format!(
                "temp_threshold must be non-negative, got {}",
                self.temp_threshold
            ));
        }
        if !self.weight_threshold.is_finite() || self.weight_threshold < 0.0 {
            return Some(format!(
                "weight_threshold must be non-negative, got {}",
                self.weight_threshold
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Thresholds::default().invalid_reason().is_none());
    }

    #[test]
    fn test_negative_temp_threshold_rejected() {
        let thresholds = Thresholds {
            temp_threshold: -1.0,
            ..Default::default()
        };
        assert!(thresholds.invalid_reason().is_some());
    }

    #[test]
    fn test_non_finite_weight_threshold_rejected() {
        let thresholds = Thresholds {
            weight_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(thresholds.invalid_reason().is_some());
    }
}
