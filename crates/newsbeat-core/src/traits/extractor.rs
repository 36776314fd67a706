use crate::evidence::{EvidenceItem, SourceKind};
use crate::models::ContentDescriptor;

/// One evidence extractor class.
///
/// Extractors are stateless, side-effect-free, and order-insensitive: each is
/// a pure function of the content descriptor and may run in parallel with the
/// others. The only data dependency is the join point into the synthesizer,
/// which must see the union of all extractor outputs.
pub trait IEvidenceExtractor: Send + Sync {
    /// The extractor class this implementation represents.
    fn kind(&self) -> SourceKind;

    /// Produce zero or more evidence items for the given content.
    /// Absent input fields yield an empty list — there are no failure modes.
    fn extract(&self, content: &ContentDescriptor) -> Vec<EvidenceItem>;
}
