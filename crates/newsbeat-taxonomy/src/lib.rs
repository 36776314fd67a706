//! # newsbeat-taxonomy
//!
//! The beat taxonomy: section-path, keyword-pattern, context-indicator, and
//! byline-role tables. Ships a built-in editorial taxonomy and accepts
//! TOML-loadable specs, validated once at load time and immutable afterward.
//! Extractors receive a taxonomy by injection — never ambient global lookup —
//! so the engine stays unit-testable with alternate tables.

mod builtin;
pub mod compiled;
pub mod spec;

pub use compiled::{BeatTaxonomy, BylineMatcher, ContextMatcher, KeywordMatcher};
pub use spec::{BylineRule, ContextRule, KeywordRule, SectionRule, TaxonomySpec};
