/// Load-time taxonomy validation errors.
///
/// A malformed taxonomy is a fatal startup condition, never a per-call error:
/// validation happens once when a spec is compiled into a `BeatTaxonomy`.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("empty beat label in {table} table")]
    EmptyBeatLabel { table: &'static str },

    #[error("empty section segment")]
    EmptySegment,

    #[error("section segment '{segment}' maps to no beats")]
    EmptySectionMapping { segment: String },

    #[error("beat '{beat}' has no {table} entries")]
    EmptyEntry { beat: String, table: &'static str },

    #[error("invalid pattern '{pattern}' for beat '{beat}': {reason}")]
    InvalidPattern {
        beat: String,
        pattern: String,
        reason: String,
    },
}
