pub mod confidence;
pub mod item;
pub mod source;

pub use confidence::Confidence;
pub use item::EvidenceItem;
pub use source::SourceKind;
