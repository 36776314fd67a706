//! Ranked per-beat score view, for audit and debugging.

use serde::{Deserialize, Serialize};

use newsbeat_core::evidence::Confidence;

use crate::accumulator::BeatScoreAccumulator;

/// One beat's accumulated totals and the evidence strings behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatScore {
    pub beat: String,
    pub total_score: f64,
    pub max_confidence: Confidence,
    pub evidence: Vec<String>,
}

/// All candidate beats in rank order, including ones that cleared no
/// threshold — the full picture behind an analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBreakdown {
    pub beats: Vec<BeatScore>,
}

impl AnalysisBreakdown {
    pub(crate) fn from_ranked(ranked: &[BeatScoreAccumulator]) -> Self {
        Self {
            beats: ranked
                .iter()
                .map(|acc| BeatScore {
                    beat: acc.beat.clone(),
                    total_score: acc.total_score,
                    max_confidence: acc.max_confidence,
                    evidence: acc.sources.iter().map(|s| s.evidence.clone()).collect(),
                })
                .collect(),
        }
    }
}
