//! Compiled, validated taxonomy tables.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use newsbeat_core::errors::{NewsbeatResult, TaxonomyError};

use crate::builtin;
use crate::spec::TaxonomySpec;

/// Compiled keyword patterns for one beat.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pub beat: String,
    pub patterns: Vec<Regex>,
}

/// Lowercased indicator words for one beat.
#[derive(Debug, Clone)]
pub struct ContextMatcher {
    pub beat: String,
    pub indicators: Vec<String>,
}

/// One compiled byline role pattern.
#[derive(Debug, Clone)]
pub struct BylineMatcher {
    pub regex: Regex,
    pub beat: String,
}

/// The compiled beat taxonomy. Immutable after construction; shared by
/// reference across all extractors.
///
/// Sections are keyed in a `BTreeMap` so substring scans iterate in a fixed
/// order — classification output must be bit-identical across runs.
#[derive(Debug, Clone)]
pub struct BeatTaxonomy {
    sections: BTreeMap<String, Vec<String>>,
    keywords: Vec<KeywordMatcher>,
    contexts: Vec<ContextMatcher>,
    bylines: Vec<BylineMatcher>,
}

impl BeatTaxonomy {
    /// Compile and validate a spec. Any malformed entry is a fatal load-time
    /// error — classification calls never validate.
    pub fn from_spec(spec: &TaxonomySpec) -> Result<Self, TaxonomyError> {
        let mut sections = BTreeMap::new();
        for rule in &spec.sections {
            let segment = rule.segment.trim().to_lowercase();
            if segment.is_empty() {
                return Err(TaxonomyError::EmptySegment);
            }
            if rule.beats.is_empty() {
                return Err(TaxonomyError::EmptySectionMapping { segment });
            }
            if rule.beats.iter().any(|b| b.trim().is_empty()) {
                return Err(TaxonomyError::EmptyBeatLabel { table: "section" });
            }
            sections.insert(segment, rule.beats.clone());
        }

        let mut keywords = Vec::with_capacity(spec.keywords.len());
        for rule in &spec.keywords {
            if rule.beat.trim().is_empty() {
                return Err(TaxonomyError::EmptyBeatLabel { table: "keyword" });
            }
            if rule.patterns.is_empty() {
                return Err(TaxonomyError::EmptyEntry {
                    beat: rule.beat.clone(),
                    table: "keyword",
                });
            }
            let patterns = rule
                .patterns
                .iter()
                .map(|p| compile_insensitive(&rule.beat, p))
                .collect::<Result<Vec<_>, _>>()?;
            keywords.push(KeywordMatcher {
                beat: rule.beat.clone(),
                patterns,
            });
        }

        let mut contexts = Vec::with_capacity(spec.contexts.len());
        for rule in &spec.contexts {
            if rule.beat.trim().is_empty() {
                return Err(TaxonomyError::EmptyBeatLabel { table: "context" });
            }
            if rule.indicators.is_empty() {
                return Err(TaxonomyError::EmptyEntry {
                    beat: rule.beat.clone(),
                    table: "context",
                });
            }
            let mut indicators = Vec::with_capacity(rule.indicators.len());
            for word in &rule.indicators {
                if word.trim().is_empty() {
                    return Err(TaxonomyError::InvalidPattern {
                        beat: rule.beat.clone(),
                        pattern: word.clone(),
                        reason: "empty indicator word".to_string(),
                    });
                }
                indicators.push(word.to_lowercase());
            }
            contexts.push(ContextMatcher {
                beat: rule.beat.clone(),
                indicators,
            });
        }

        let mut bylines = Vec::with_capacity(spec.bylines.len());
        for rule in &spec.bylines {
            if rule.beat.trim().is_empty() {
                return Err(TaxonomyError::EmptyBeatLabel { table: "byline" });
            }
            bylines.push(BylineMatcher {
                regex: compile_insensitive(&rule.beat, &rule.pattern)?,
                beat: rule.beat.clone(),
            });
        }

        Ok(Self {
            sections,
            keywords,
            contexts,
            bylines,
        })
    }

    /// Parse a TOML document and compile it.
    pub fn from_toml_str(raw: &str) -> NewsbeatResult<Self> {
        let spec = TaxonomySpec::from_toml_str(raw)?;
        Ok(Self::from_spec(&spec)?)
    }

    /// The built-in editorial taxonomy.
    ///
    /// Individual pattern-compile failures are skipped with a warning rather
    /// than failing construction; the remaining tables stay usable.
    pub fn builtin() -> Self {
        let mut sections = BTreeMap::new();
        for (segment, beats) in builtin::SECTIONS {
            sections.insert(
                (*segment).to_string(),
                beats.iter().map(|b| (*b).to_string()).collect(),
            );
        }

        let keywords = builtin::KEYWORDS
            .iter()
            .map(|(beat, patterns)| KeywordMatcher {
                beat: (*beat).to_string(),
                patterns: patterns
                    .iter()
                    .filter_map(|p| compile_or_warn(beat, p))
                    .collect(),
            })
            .collect();

        let contexts = builtin::CONTEXTS
            .iter()
            .map(|(beat, indicators)| ContextMatcher {
                beat: (*beat).to_string(),
                indicators: indicators.iter().map(|w| (*w).to_string()).collect(),
            })
            .collect();

        let bylines = builtin::BYLINES
            .iter()
            .filter_map(|(pattern, beat)| {
                compile_or_warn(beat, pattern).map(|regex| BylineMatcher {
                    regex,
                    beat: (*beat).to_string(),
                })
            })
            .collect();

        Self {
            sections,
            keywords,
            contexts,
            bylines,
        }
    }

    /// Exact lookup for a lowercased section segment.
    pub fn section_beats(&self, segment: &str) -> Option<&[String]> {
        self.sections.get(segment).map(Vec::as_slice)
    }

    /// All section entries in fixed (sorted) order.
    pub fn sections<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        self.sections
            .iter()
            .map(|(segment, beats)| (segment.as_str(), beats.as_slice()))
    }

    pub fn keywords(&self) -> &[KeywordMatcher] {
        &self.keywords
    }

    pub fn contexts(&self) -> &[ContextMatcher] {
        &self.contexts
    }

    pub fn bylines(&self) -> &[BylineMatcher] {
        &self.bylines
    }
}

impl Default for BeatTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

fn compile_insensitive(beat: &str, pattern: &str) -> Result<Regex, TaxonomyError> {
    if pattern.trim().is_empty() {
        return Err(TaxonomyError::InvalidPattern {
            beat: beat.to_string(),
            pattern: pattern.to_string(),
            reason: "empty pattern".to_string(),
        });
    }
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| TaxonomyError::InvalidPattern {
            beat: beat.to_string(),
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

fn compile_or_warn(beat: &str, pattern: &str) -> Option<Regex> {
    match compile_insensitive(beat, pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!("taxonomy: skipping builtin pattern: {e}");
            None
        }
    }
}
