//! Keyword-pattern extractor — medium-trust evidence class.

use std::sync::Arc;

use newsbeat_core::config::ExtractionConfig;
use newsbeat_core::evidence::{EvidenceItem, SourceKind};
use newsbeat_core::models::ContentDescriptor;
use newsbeat_core::traits::IEvidenceExtractor;
use newsbeat_taxonomy::BeatTaxonomy;

/// Matches case-insensitive keyword patterns anywhere in title + body.
///
/// Each matching pattern emits its own item, so multiple distinct patterns
/// for one beat are additive toward that beat's score.
pub struct KeywordExtractor {
    taxonomy: Arc<BeatTaxonomy>,
    config: ExtractionConfig,
}

impl KeywordExtractor {
    pub fn new(taxonomy: Arc<BeatTaxonomy>, config: ExtractionConfig) -> Self {
        Self { taxonomy, config }
    }
}

impl IEvidenceExtractor for KeywordExtractor {
    fn kind(&self) -> SourceKind {
        SourceKind::Keyword
    }

    fn extract(&self, content: &ContentDescriptor) -> Vec<EvidenceItem> {
        let text = content.combined_text();

        let mut items = Vec::new();
        for matcher in self.taxonomy.keywords() {
            for pattern in &matcher.patterns {
                if let Some(found) = pattern.find(&text) {
                    items.push(EvidenceItem::new(
                        matcher.beat.as_str(),
                        SourceKind::Keyword,
                        self.config.keyword_confidence,
                        self.config.keyword_weight,
                        format!("Keyword match: \"{}\"", found.as_str()),
                    ));
                }
            }
        }
        items
    }
}
