//! Context-indicator extractor — low-trust evidence class.

use std::sync::Arc;

use newsbeat_core::config::ExtractionConfig;
use newsbeat_core::evidence::{EvidenceItem, SourceKind};
use newsbeat_core::models::ContentDescriptor;
use newsbeat_core::traits::IEvidenceExtractor;
use newsbeat_taxonomy::BeatTaxonomy;

/// Counts co-occurring indicator words per beat in the lowercased title +
/// body, by plain substring containment.
///
/// Gated on a minimum number of distinct indicators (default 2): one
/// incidental word must not trigger a beat. Confidence grows with the match
/// count and is clamped to 1.0.
pub struct ContextExtractor {
    taxonomy: Arc<BeatTaxonomy>,
    config: ExtractionConfig,
}

impl ContextExtractor {
    pub fn new(taxonomy: Arc<BeatTaxonomy>, config: ExtractionConfig) -> Self {
        Self { taxonomy, config }
    }
}

impl IEvidenceExtractor for ContextExtractor {
    fn kind(&self) -> SourceKind {
        SourceKind::Context
    }

    fn extract(&self, content: &ContentDescriptor) -> Vec<EvidenceItem> {
        let text = content.combined_text().to_lowercase();

        let mut items = Vec::new();
        for matcher in self.taxonomy.contexts() {
            let found: Vec<&str> = matcher
                .indicators
                .iter()
                .filter(|word| text.contains(word.as_str()))
                .map(String::as_str)
                .collect();

            if found.len() >= self.config.context_min_matches {
                let confidence = self.config.context_base_confidence
                    + self.config.context_confidence_step * found.len() as f64;
                items.push(EvidenceItem::new(
                    matcher.beat.as_str(),
                    SourceKind::Context,
                    confidence,
                    self.config.context_weight,
                    format!("Context indicators: {}", found.join(", ")),
                ));
            }
        }
        items
    }
}
