//! Section-path extractor — highest-trust evidence class.

use std::sync::Arc;

use newsbeat_core::config::ExtractionConfig;
use newsbeat_core::evidence::{EvidenceItem, SourceKind};
use newsbeat_core::models::ContentDescriptor;
use newsbeat_core::traits::IEvidenceExtractor;
use newsbeat_taxonomy::BeatTaxonomy;

/// Matches URL/section path segments against the section table.
///
/// Each segment is tried two ways: an exact table lookup (direct, highest
/// trust) and a symmetric substring scan over every table key (partial, lower
/// trust). Both may fire for the same segment — over-generation is
/// intentional; deduplication happens in the synthesizer via score
/// accumulation, not by suppressing items here.
pub struct SectionExtractor {
    taxonomy: Arc<BeatTaxonomy>,
    config: ExtractionConfig,
}

impl SectionExtractor {
    pub fn new(taxonomy: Arc<BeatTaxonomy>, config: ExtractionConfig) -> Self {
        Self { taxonomy, config }
    }
}

impl IEvidenceExtractor for SectionExtractor {
    fn kind(&self) -> SourceKind {
        SourceKind::Section
    }

    fn extract(&self, content: &ContentDescriptor) -> Vec<EvidenceItem> {
        let Some(path) = content.section_path.as_deref() else {
            return Vec::new();
        };

        let mut items = Vec::new();
        for segment in path.to_lowercase().split('/').filter(|s| !s.is_empty()) {
            if let Some(beats) = self.taxonomy.section_beats(segment) {
                for beat in beats {
                    items.push(EvidenceItem::new(
                        beat.as_str(),
                        SourceKind::Section,
                        self.config.section_direct_confidence,
                        self.config.section_direct_weight,
                        format!("Section path: /{segment}"),
                    ));
                }
            }

            for (key, beats) in self.taxonomy.sections() {
                if segment.contains(key) || key.contains(segment) {
                    for beat in beats {
                        items.push(EvidenceItem::new(
                            beat.as_str(),
                            SourceKind::Section,
                            self.config.section_partial_confidence,
                            self.config.section_partial_weight,
                            format!("Section path contains: {key}"),
                        ));
                    }
                }
            }
        }
        items
    }
}
