use serde::{Deserialize, Serialize};

use crate::evidence::Confidence;

/// Beat labels grouped by originating extractor class.
///
/// A coarse audit view over the raw evidence, independent of the ranked
/// primary/secondary sets: labels repeat once per contributing item and are
/// not deduplicated. Byline evidence contributes to scores only and has no
/// group here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub section_based: Vec<String>,
    pub keyword_based: Vec<String>,
    pub context_based: Vec<String>,
}

/// The result of one synthesis pass: ranked beats, aggregate confidence, and
/// a human-readable rationale.
///
/// Terminal, read-only artifact — comparison and merging consume existing
/// analyses and produce brand-new ones; they never mutate inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatAnalysis {
    /// Top-ranked beats above the primary threshold, capped.
    pub primary_beats: Vec<String>,
    /// Runner-up beats above the secondary threshold, capped, disjoint from
    /// the primaries.
    pub secondary_beats: Vec<String>,
    /// Analysis-level aggregate confidence.
    pub confidence: Confidence,
    /// Provenance summary of the contributing evidence.
    pub sources: SourceBreakdown,
    /// Generated natural-language rationale for the top beat.
    pub reasoning: String,
}

impl BeatAnalysis {
    /// The canonical evidence-free result. Zero confidence is a valid,
    /// informative outcome, not an error.
    pub fn empty(reasoning: impl Into<String>) -> Self {
        Self {
            primary_beats: Vec::new(),
            secondary_beats: Vec::new(),
            confidence: Confidence::ZERO,
            sources: SourceBreakdown::default(),
            reasoning: reasoning.into(),
        }
    }

    /// True when no beat cleared either threshold.
    pub fn is_unclassified(&self) -> bool {
        self.primary_beats.is_empty() && self.secondary_beats.is_empty()
    }
}
