//! Byline extractor — supplementary-trust evidence class.

use std::sync::Arc;

use newsbeat_core::config::ExtractionConfig;
use newsbeat_core::evidence::{EvidenceItem, SourceKind};
use newsbeat_core::models::ContentDescriptor;
use newsbeat_core::traits::IEvidenceExtractor;
use newsbeat_taxonomy::BeatTaxonomy;

/// Matches role keywords in the author byline, e.g. "technology
/// correspondent". Skipped entirely when no byline is present. A byline can
/// match multiple entries (a dual-beat reporter).
pub struct BylineExtractor {
    taxonomy: Arc<BeatTaxonomy>,
    config: ExtractionConfig,
}

impl BylineExtractor {
    pub fn new(taxonomy: Arc<BeatTaxonomy>, config: ExtractionConfig) -> Self {
        Self { taxonomy, config }
    }
}

impl IEvidenceExtractor for BylineExtractor {
    fn kind(&self) -> SourceKind {
        SourceKind::Byline
    }

    fn extract(&self, content: &ContentDescriptor) -> Vec<EvidenceItem> {
        let Some(byline) = content.byline.as_deref() else {
            return Vec::new();
        };

        let mut items = Vec::new();
        for matcher in self.taxonomy.bylines() {
            if matcher.regex.is_match(byline) {
                items.push(EvidenceItem::new(
                    matcher.beat.as_str(),
                    SourceKind::Byline,
                    self.config.byline_confidence,
                    self.config.byline_weight,
                    format!("Byline mention: \"{byline}\""),
                ));
            }
        }
        items
    }
}
