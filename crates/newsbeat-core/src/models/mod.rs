pub mod beat_analysis;
pub mod content;

pub use beat_analysis::{BeatAnalysis, SourceBreakdown};
pub use content::ContentDescriptor;
