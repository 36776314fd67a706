use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Synthesizer tuning: score thresholds, ranked-set caps, and the confidence
/// normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Minimum accumulated score for a beat to rank as primary.
    pub primary_threshold: f64,
    /// Minimum accumulated score for a beat to rank as secondary.
    pub secondary_threshold: f64,
    pub max_primary: usize,
    pub max_secondary: usize,
    /// Theoretical maximum per-item contribution, used as the denominator of
    /// the analysis-confidence normalizer. Keep in sync with the largest
    /// extraction class weight (`ExtractionConfig::max_class_weight`).
    pub max_item_weight: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            primary_threshold: defaults::DEFAULT_PRIMARY_THRESHOLD,
            secondary_threshold: defaults::DEFAULT_SECONDARY_THRESHOLD,
            max_primary: defaults::DEFAULT_MAX_PRIMARY,
            max_secondary: defaults::DEFAULT_MAX_SECONDARY,
            max_item_weight: defaults::DEFAULT_SECTION_DIRECT_WEIGHT,
        }
    }
}

impl SynthesisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("primary_threshold", self.primary_threshold),
            ("secondary_threshold", self.secondary_threshold),
            ("max_item_weight", self.max_item_weight),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.primary_threshold < self.secondary_threshold {
            return Err(ConfigError::ThresholdOrder {
                primary: self.primary_threshold,
                secondary: self.secondary_threshold,
            });
        }
        if self.max_primary == 0 {
            return Err(ConfigError::ZeroCap {
                name: "max_primary",
            });
        }
        if self.max_secondary == 0 {
            return Err(ConfigError::ZeroCap {
                name: "max_secondary",
            });
        }
        Ok(())
    }
}
