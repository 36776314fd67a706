//! Per-beat fold state, built from the evidence list and discarded after
//! synthesis.

use std::collections::HashMap;

use newsbeat_core::evidence::{Confidence, EvidenceItem};

/// Running totals for one candidate beat.
#[derive(Debug, Clone)]
pub(crate) struct BeatScoreAccumulator {
    pub beat: String,
    /// Sum of `confidence × weight` over contributing items.
    pub total_score: f64,
    /// Highest single-item confidence seen.
    pub max_confidence: Confidence,
    /// All contributing items, in arrival order.
    pub sources: Vec<EvidenceItem>,
}

/// Fold the evidence list into one accumulator per beat, preserving
/// first-seen order.
pub(crate) fn accumulate(items: &[EvidenceItem]) -> Vec<BeatScoreAccumulator> {
    let mut by_beat: Vec<BeatScoreAccumulator> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let slot = match index.get(item.beat.as_str()) {
            Some(&i) => i,
            None => {
                by_beat.push(BeatScoreAccumulator {
                    beat: item.beat.clone(),
                    total_score: 0.0,
                    max_confidence: Confidence::ZERO,
                    sources: Vec::new(),
                });
                index.insert(item.beat.as_str(), by_beat.len() - 1);
                by_beat.len() - 1
            }
        };

        let acc = &mut by_beat[slot];
        acc.total_score += item.score();
        if item.confidence > acc.max_confidence {
            acc.max_confidence = item.confidence;
        }
        acc.sources.push(item.clone());
    }

    by_beat
}
