/// Newsbeat engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reasoning string for an analysis produced from zero evidence items.
pub const NO_EVIDENCE_REASONING: &str = "No clear beat indicators found in content.";

/// Reasoning string for a merge invoked with no input analyses.
pub const NO_ANALYSES_REASONING: &str = "No analyses to merge";
