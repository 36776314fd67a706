//! Shared builders for newsbeat tests: canned content descriptors and a tiny
//! alternate taxonomy for exercising the engine independently of the builtin
//! tables.

use newsbeat_core::models::ContentDescriptor;
use newsbeat_taxonomy::{
    BeatTaxonomy, BylineRule, ContextRule, KeywordRule, SectionRule, TaxonomySpec,
};

/// Build a descriptor from optional parts.
pub fn descriptor(
    section_path: Option<&str>,
    title: Option<&str>,
    body: Option<&str>,
    byline: Option<&str>,
) -> ContentDescriptor {
    ContentDescriptor {
        section_path: section_path.map(str::to_string),
        title: title.map(str::to_string),
        body: body.map(str::to_string),
        byline: byline.map(str::to_string),
    }
}

/// A technology article with section, text, and byline signals.
pub fn tech_article() -> ContentDescriptor {
    descriptor(
        Some("/technology/ai"),
        Some("AI startup raises funding"),
        Some("The startup trains a large language model on its own cloud platform."),
        Some("Jane Doe, technology correspondent"),
    )
}

/// Body-only content with two finance context indicators and no keywords.
pub fn finance_context_article() -> ContentDescriptor {
    descriptor(
        None,
        None,
        Some("The round brought new investment and funding from existing backers."),
        None,
    )
}

/// A minimal two-beat taxonomy, independent of the builtin tables.
pub fn tiny_taxonomy() -> BeatTaxonomy {
    let spec = tiny_spec();
    match BeatTaxonomy::from_spec(&spec) {
        Ok(taxonomy) => taxonomy,
        Err(e) => panic!("tiny taxonomy must compile: {e}"),
    }
}

/// The uncompiled spec behind [`tiny_taxonomy`], for validation tests.
pub fn tiny_spec() -> TaxonomySpec {
    TaxonomySpec {
        sections: vec![
            SectionRule {
                segment: "gadgets".to_string(),
                beats: vec!["tech".to_string()],
            },
            SectionRule {
                segment: "markets".to_string(),
                beats: vec!["money".to_string()],
            },
        ],
        keywords: vec![
            KeywordRule {
                beat: "tech".to_string(),
                patterns: vec![r"\bgadget\b".to_string(), r"\brobot\b".to_string()],
            },
            KeywordRule {
                beat: "money".to_string(),
                patterns: vec![r"\bstocks?\b".to_string()],
            },
        ],
        contexts: vec![ContextRule {
            beat: "money".to_string(),
            indicators: vec!["trading".to_string(), "broker".to_string()],
        }],
        bylines: vec![BylineRule {
            pattern: "gadget|tech".to_string(),
            beat: "tech".to_string(),
        }],
    }
}
