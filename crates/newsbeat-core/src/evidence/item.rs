use serde::{Deserialize, Serialize};

use super::{Confidence, SourceKind};

/// One unit of support for a candidate beat.
///
/// A value object: produced once inside an extractor, consumed once by the
/// synthesizer's fold, never mutated. Beat labels are open-ended strings —
/// taxonomy tables are not a closed enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Candidate beat label, e.g. "technology".
    pub beat: String,
    /// Which extractor class produced this item.
    pub source: SourceKind,
    /// The extractor's certainty for this single item.
    pub confidence: Confidence,
    /// Extractor-class authority. Always positive; validated at config load.
    pub weight: f64,
    /// Human-readable description of what matched, for audit/debugging.
    pub evidence: String,
}

impl EvidenceItem {
    pub fn new(
        beat: impl Into<String>,
        source: SourceKind,
        confidence: f64,
        weight: f64,
        evidence: impl Into<String>,
    ) -> Self {
        debug_assert!(weight > 0.0, "evidence weight must be positive");
        Self {
            beat: beat.into(),
            source,
            confidence: Confidence::new(confidence),
            weight,
            evidence: evidence.into(),
        }
    }

    /// This item's contribution to its beat's total score.
    pub fn score(&self) -> f64 {
        self.confidence.value() * self.weight
    }
}
