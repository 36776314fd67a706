//! # newsbeat-extraction
//!
//! The four evidence extractors — section, keyword, context, byline — plus an
//! engine that fans content out to all of them and joins their evidence.
//! Extractors are pure functions of their inputs: no I/O, no shared mutable
//! state, safely parallelizable.

pub mod engine;
pub mod extractors;

pub use engine::ExtractionEngine;
pub use extractors::{BylineExtractor, ContextExtractor, KeywordExtractor, SectionExtractor};
