//! Plain-data taxonomy spec, loadable from TOML.
//!
//! A `TaxonomySpec` carries uncompiled tables; compiling it into a
//! [`BeatTaxonomy`](crate::BeatTaxonomy) validates every entry.

use serde::{Deserialize, Serialize};

use newsbeat_core::errors::NewsbeatResult;

/// One section segment mapped to the beats it implies.
///
/// A segment may imply multiple beats, e.g. `ai` → `["artificial
/// intelligence", "technology"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRule {
    pub segment: String,
    pub beats: Vec<String>,
}

/// Case-insensitive regex patterns whose match anywhere in title + body
/// counts as a keyword hit for the beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub beat: String,
    pub patterns: Vec<String>,
}

/// Plain indicator words for a beat, matched by case-insensitive substring
/// containment (not regex).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRule {
    pub beat: String,
    pub indicators: Vec<String>,
}

/// A role regex tested against the author byline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BylineRule {
    pub pattern: String,
    pub beat: String,
}

/// The full uncompiled taxonomy. Pure data; order of rules is preserved and
/// determines evidence emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomySpec {
    pub sections: Vec<SectionRule>,
    pub keywords: Vec<KeywordRule>,
    pub contexts: Vec<ContextRule>,
    pub bylines: Vec<BylineRule>,
}

impl TaxonomySpec {
    /// Parse a spec from a TOML document. Validation happens when the spec
    /// is compiled.
    pub fn from_toml_str(raw: &str) -> NewsbeatResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}
