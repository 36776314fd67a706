//! Reference scoring constants. The entire tunable surface of the engine
//! lives in the config structs; these are their defaults.

// Extractor-class weights.
pub const DEFAULT_SECTION_DIRECT_WEIGHT: f64 = 10.0;
pub const DEFAULT_SECTION_PARTIAL_WEIGHT: f64 = 8.0;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 5.0;
pub const DEFAULT_CONTEXT_WEIGHT: f64 = 3.0;
pub const DEFAULT_BYLINE_WEIGHT: f64 = 4.0;

// Per-item confidence assigned by each extractor class.
pub const DEFAULT_SECTION_DIRECT_CONFIDENCE: f64 = 0.9;
pub const DEFAULT_SECTION_PARTIAL_CONFIDENCE: f64 = 0.7;
pub const DEFAULT_KEYWORD_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_BYLINE_CONFIDENCE: f64 = 0.5;

// Context confidence is base + step × distinct-indicator count, clamped.
pub const DEFAULT_CONTEXT_BASE_CONFIDENCE: f64 = 0.4;
pub const DEFAULT_CONTEXT_CONFIDENCE_STEP: f64 = 0.1;

/// Multiplicity gate: a single incidental indicator word must not trigger a
/// beat.
pub const DEFAULT_CONTEXT_MIN_MATCHES: usize = 2;

// Synthesis thresholds and caps.
pub const DEFAULT_PRIMARY_THRESHOLD: f64 = 5.0;
pub const DEFAULT_SECONDARY_THRESHOLD: f64 = 2.0;
pub const DEFAULT_MAX_PRIMARY: usize = 3;
pub const DEFAULT_MAX_SECONDARY: usize = 5;
