//! Synthesizer — single-pass aggregation of extractor evidence into a
//! ranked, confidence-scored `BeatAnalysis`.

use std::cmp::Ordering;

use tracing::debug;

use newsbeat_core::config::SynthesisConfig;
use newsbeat_core::constants::NO_EVIDENCE_REASONING;
use newsbeat_core::evidence::{Confidence, EvidenceItem, SourceKind};
use newsbeat_core::models::{BeatAnalysis, SourceBreakdown};

use crate::accumulator::{accumulate, BeatScoreAccumulator};
use crate::breakdown::AnalysisBreakdown;
use crate::reasoning;

/// Aggregates all extractors' outputs into one `BeatAnalysis`.
///
/// Total over every input, including the empty one: absence of evidence is a
/// valid zero-confidence result, not an error.
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesize the union of all extractor outputs into one analysis.
    pub fn synthesize(&self, items: &[EvidenceItem]) -> BeatAnalysis {
        self.run(items).0
    }

    /// Synthesize, also returning the ranked per-beat score view for
    /// audit/debugging.
    pub fn synthesize_with_breakdown(
        &self,
        items: &[EvidenceItem],
    ) -> (BeatAnalysis, AnalysisBreakdown) {
        let (analysis, ranked) = self.run(items);
        (analysis, AnalysisBreakdown::from_ranked(&ranked))
    }

    fn run(&self, items: &[EvidenceItem]) -> (BeatAnalysis, Vec<BeatScoreAccumulator>) {
        if items.is_empty() {
            return (BeatAnalysis::empty(NO_EVIDENCE_REASONING), Vec::new());
        }

        let mut ranked = accumulate(items);

        // Rank by accumulated score; ties order by beat label so the result
        // never depends on fold or container iteration order.
        ranked.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.beat.cmp(&b.beat))
        });

        let primary_beats: Vec<String> = ranked
            .iter()
            .filter(|acc| acc.total_score >= self.config.primary_threshold)
            .take(self.config.max_primary)
            .map(|acc| acc.beat.clone())
            .collect();

        // Runners-up: anything not primary above the lower threshold. Beats
        // pushed past the primary cap land here instead of being dropped.
        let secondary_beats: Vec<String> = ranked
            .iter()
            .filter(|acc| !primary_beats.contains(&acc.beat))
            .filter(|acc| acc.total_score >= self.config.secondary_threshold)
            .take(self.config.max_secondary)
            .map(|acc| acc.beat.clone())
            .collect();

        let total: f64 = ranked.iter().map(|acc| acc.total_score).sum();
        let normalizer = (items.len() as f64 * self.config.max_item_weight).max(1.0);
        let confidence = Confidence::new(total / normalizer);

        let mut qualifying: Vec<&str> = primary_beats.iter().map(String::as_str).collect();
        qualifying.extend(secondary_beats.iter().map(String::as_str));
        let reasoning = reasoning::build(&ranked[0], &qualifying);

        debug!(
            "synthesis: {} items, {} beats, {} primary, confidence {confidence}",
            items.len(),
            ranked.len(),
            primary_beats.len(),
        );

        let analysis = BeatAnalysis {
            primary_beats,
            secondary_beats,
            confidence,
            sources: source_breakdown(items),
            reasoning,
        };
        (analysis, ranked)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(SynthesisConfig::default())
    }
}

/// Group beat labels by originating extractor class. Labels repeat once per
/// contributing item; byline evidence has no group in this audit view.
fn source_breakdown(items: &[EvidenceItem]) -> SourceBreakdown {
    let mut breakdown = SourceBreakdown::default();
    for item in items {
        match item.source {
            SourceKind::Section => breakdown.section_based.push(item.beat.clone()),
            SourceKind::Keyword => breakdown.keyword_based.push(item.beat.clone()),
            SourceKind::Context => breakdown.context_based.push(item.beat.clone()),
            SourceKind::Byline => {}
        }
    }
    breakdown
}
