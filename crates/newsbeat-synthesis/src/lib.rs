//! # newsbeat-synthesis
//!
//! Folds evidence items into per-beat weighted scores, ranks them into
//! primary/secondary sets under threshold and cap rules, computes an
//! analysis-level confidence, and generates a human-readable rationale.
//! Also provides comparison and merging of completed analyses.

mod accumulator;
mod reasoning;

pub mod breakdown;
pub mod engine;
pub mod merge;

pub use breakdown::{AnalysisBreakdown, BeatScore};
pub use engine::Synthesizer;
pub use merge::compare;
