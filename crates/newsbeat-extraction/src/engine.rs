//! ExtractionEngine — fans one content descriptor out to every extractor and
//! joins their evidence for synthesis.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use newsbeat_core::config::ExtractionConfig;
use newsbeat_core::evidence::EvidenceItem;
use newsbeat_core::models::ContentDescriptor;
use newsbeat_core::traits::IEvidenceExtractor;
use newsbeat_taxonomy::BeatTaxonomy;

use crate::extractors::{BylineExtractor, ContextExtractor, KeywordExtractor, SectionExtractor};

/// Runs a set of evidence extractors over content.
///
/// The default set is all four classes. Callers needing a subset (e.g. no
/// byline handling) construct the engine with their own extractor list.
pub struct ExtractionEngine {
    extractors: Vec<Box<dyn IEvidenceExtractor>>,
}

impl ExtractionEngine {
    /// Engine with all four extractor classes over a shared taxonomy.
    pub fn new(taxonomy: Arc<BeatTaxonomy>, config: ExtractionConfig) -> Self {
        let extractors: Vec<Box<dyn IEvidenceExtractor>> = vec![
            Box::new(SectionExtractor::new(Arc::clone(&taxonomy), config.clone())),
            Box::new(KeywordExtractor::new(Arc::clone(&taxonomy), config.clone())),
            Box::new(ContextExtractor::new(Arc::clone(&taxonomy), config.clone())),
            Box::new(BylineExtractor::new(taxonomy, config)),
        ];
        Self { extractors }
    }

    /// Engine over a caller-chosen extractor set.
    pub fn with_extractors(extractors: Vec<Box<dyn IEvidenceExtractor>>) -> Self {
        Self { extractors }
    }

    /// Run every extractor sequentially and concatenate their evidence in
    /// extractor order.
    pub fn extract(&self, content: &ContentDescriptor) -> Vec<EvidenceItem> {
        let items: Vec<EvidenceItem> = self
            .extractors
            .iter()
            .flat_map(|e| {
                let found = e.extract(content);
                debug!("extraction: {} items from {}", found.len(), e.kind());
                found
            })
            .collect();
        items
    }

    /// Run every extractor in parallel and join.
    ///
    /// Extractors are pure and independent; the join here is the only
    /// coordination point. Output order is identical to [`extract`], so the
    /// two are interchangeable.
    ///
    /// [`extract`]: ExtractionEngine::extract
    pub fn extract_parallel(&self, content: &ContentDescriptor) -> Vec<EvidenceItem> {
        let per_extractor: Vec<Vec<EvidenceItem>> = self
            .extractors
            .par_iter()
            .map(|e| e.extract(content))
            .collect();

        let items: Vec<EvidenceItem> = per_extractor.into_iter().flatten().collect();
        debug!(
            "extraction: {} items from {} extractors",
            items.len(),
            self.extractors.len()
        );
        items
    }
}
