use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance tag for an evidence item: which extractor class produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Section/URL path match — highest trust.
    Section,
    /// Keyword pattern match against title + body — medium trust.
    Keyword,
    /// Co-occurring indicator words — low trust.
    Context,
    /// Author byline role match — supplementary trust.
    Byline,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Section => "section",
            SourceKind::Keyword => "keyword",
            SourceKind::Context => "context",
            SourceKind::Byline => "byline",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
