use serde::{Deserialize, Serialize};

/// Descriptor for one piece of editorial content to classify.
///
/// All fields are optional — extractors skip what is absent. The surrounding
/// application is responsible for fetching and parsing content; this engine
/// never performs I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDescriptor {
    /// URL path or explicit section path, e.g. "/technology/ai".
    pub section_path: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Author byline, e.g. "Jane Doe, technology correspondent".
    pub byline: Option<String>,
}

impl ContentDescriptor {
    /// Title and body concatenated with a single space; missing fields are
    /// treated as empty strings.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.body.as_deref().unwrap_or("")
        )
    }
}
