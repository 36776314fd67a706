pub mod config_error;
pub mod taxonomy_error;

pub use config_error::ConfigError;
pub use taxonomy_error::TaxonomyError;

/// Top-level error for the newsbeat engine.
///
/// Classification itself is total — every input, including fully empty input,
/// yields a well-formed analysis. The only fallible surfaces are load-time:
/// taxonomy and config validation, plus TOML parsing of either.
#[derive(Debug, thiserror::Error)]
pub enum NewsbeatError {
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type NewsbeatResult<T> = Result<T, NewsbeatError>;
