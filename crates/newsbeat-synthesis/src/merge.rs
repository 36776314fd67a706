//! Comparison and merging of completed analyses.
//!
//! Both consume existing `BeatAnalysis` values and produce (or select) a
//! result without mutating their inputs.

use newsbeat_core::constants::NO_ANALYSES_REASONING;
use newsbeat_core::evidence::{EvidenceItem, SourceKind};
use newsbeat_core::models::BeatAnalysis;

use crate::engine::Synthesizer;

/// Synthetic-item weights for re-synthesis of already-analyzed beats.
/// Primaries survived one synthesis pass, so they re-enter at the
/// highest-trust class weight; secondaries at the keyword class weight.
const MERGE_PRIMARY_WEIGHT: f64 = 10.0;
const MERGE_SECONDARY_WEIGHT: f64 = 5.0;
const MERGE_SECONDARY_CONFIDENCE_FACTOR: f64 = 0.8;

/// Pick the more reliable of two analyses: strictly more section-sourced
/// labels wins; on a tie, strictly higher confidence; on a full tie, the
/// first argument — a fixed, documented tie-break. Pure and total.
pub fn compare<'a>(a: &'a BeatAnalysis, b: &'a BeatAnalysis) -> &'a BeatAnalysis {
    let (sections_a, sections_b) = (a.sources.section_based.len(), b.sources.section_based.len());
    if sections_a != sections_b {
        return if sections_a > sections_b { a } else { b };
    }
    if b.confidence > a.confidence {
        b
    } else {
        a
    }
}

impl Synthesizer {
    /// Merge multiple completed analyses into one fresh synthesis.
    ///
    /// Each input's primary beats re-enter as section-class synthetic
    /// evidence and its secondaries as keyword-class evidence, both weighted
    /// by that input's confidence — merging N analyses is equivalent to
    /// re-running synthesis on their summarized outputs. An empty input
    /// yields the canonical empty result; a single input is returned
    /// unchanged.
    pub fn merge(&self, analyses: &[BeatAnalysis]) -> BeatAnalysis {
        match analyses {
            [] => BeatAnalysis::empty(NO_ANALYSES_REASONING),
            [single] => single.clone(),
            _ => {
                let mut items = Vec::new();
                for analysis in analyses {
                    let confidence = analysis.confidence.value();
                    // A zero-confidence analysis would contribute zero-weight
                    // items, which evidence invariants forbid.
                    if confidence <= 0.0 {
                        continue;
                    }
                    for beat in &analysis.primary_beats {
                        items.push(EvidenceItem::new(
                            beat.as_str(),
                            SourceKind::Section,
                            confidence,
                            MERGE_PRIMARY_WEIGHT * confidence,
                            format!("Merged primary beat (confidence {})", analysis.confidence),
                        ));
                    }
                    for beat in &analysis.secondary_beats {
                        items.push(EvidenceItem::new(
                            beat.as_str(),
                            SourceKind::Keyword,
                            confidence * MERGE_SECONDARY_CONFIDENCE_FACTOR,
                            MERGE_SECONDARY_WEIGHT * confidence,
                            format!("Merged secondary beat (confidence {})", analysis.confidence),
                        ));
                    }
                }
                self.synthesize(&items)
            }
        }
    }
}
