//! # newsbeat-core
//!
//! Foundation crate for the newsbeat classification engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod evidence;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NewsbeatConfig;
pub use errors::{NewsbeatError, NewsbeatResult};
pub use evidence::{Confidence, EvidenceItem, SourceKind};
pub use models::{BeatAnalysis, ContentDescriptor, SourceBreakdown};
