use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Extractor tuning: class weights, per-item confidence levels, and the
/// context multiplicity gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Weight for an exact section-segment match.
    pub section_direct_weight: f64,
    /// Weight for a symmetric substring section match.
    pub section_partial_weight: f64,
    pub keyword_weight: f64,
    pub context_weight: f64,
    pub byline_weight: f64,

    pub section_direct_confidence: f64,
    pub section_partial_confidence: f64,
    pub keyword_confidence: f64,
    pub byline_confidence: f64,
    /// Context confidence = base + step × distinct indicator count, clamped
    /// to 1.0.
    pub context_base_confidence: f64,
    pub context_confidence_step: f64,

    /// Minimum distinct indicator words before the context extractor emits
    /// anything for a beat.
    pub context_min_matches: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            section_direct_weight: defaults::DEFAULT_SECTION_DIRECT_WEIGHT,
            section_partial_weight: defaults::DEFAULT_SECTION_PARTIAL_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            context_weight: defaults::DEFAULT_CONTEXT_WEIGHT,
            byline_weight: defaults::DEFAULT_BYLINE_WEIGHT,
            section_direct_confidence: defaults::DEFAULT_SECTION_DIRECT_CONFIDENCE,
            section_partial_confidence: defaults::DEFAULT_SECTION_PARTIAL_CONFIDENCE,
            keyword_confidence: defaults::DEFAULT_KEYWORD_CONFIDENCE,
            byline_confidence: defaults::DEFAULT_BYLINE_CONFIDENCE,
            context_base_confidence: defaults::DEFAULT_CONTEXT_BASE_CONFIDENCE,
            context_confidence_step: defaults::DEFAULT_CONTEXT_CONFIDENCE_STEP,
            context_min_matches: defaults::DEFAULT_CONTEXT_MIN_MATCHES,
        }
    }
}

impl ExtractionConfig {
    /// Validate once at load time. Non-positive weights would silently erase
    /// whole evidence classes, so they are fatal here rather than per-call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("section_direct_weight", self.section_direct_weight),
            ("section_partial_weight", self.section_partial_weight),
            ("keyword_weight", self.keyword_weight),
            ("context_weight", self.context_weight),
            ("byline_weight", self.byline_weight),
        ];
        for (name, value) in weights {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.context_min_matches == 0 {
            return Err(ConfigError::ZeroCap {
                name: "context_min_matches",
            });
        }
        Ok(())
    }

    /// The largest configured class weight — the theoretical maximum
    /// contribution of a single evidence item, used to normalize analysis
    /// confidence.
    pub fn max_class_weight(&self) -> f64 {
        self.section_direct_weight
            .max(self.section_partial_weight)
            .max(self.keyword_weight)
            .max(self.context_weight)
            .max(self.byline_weight)
    }
}
