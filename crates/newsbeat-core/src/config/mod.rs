pub mod defaults;
pub mod extraction_config;
pub mod synthesis_config;

pub use extraction_config::ExtractionConfig;
pub use synthesis_config::SynthesisConfig;

use serde::{Deserialize, Serialize};

use crate::errors::NewsbeatResult;

/// Full engine configuration envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsbeatConfig {
    pub extraction: ExtractionConfig,
    pub synthesis: SynthesisConfig,
}

impl NewsbeatConfig {
    /// Parse from a TOML document and validate. Any failure here is a fatal
    /// startup error; classification calls themselves never fail.
    pub fn from_toml_str(raw: &str) -> NewsbeatResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NewsbeatResult<()> {
        self.extraction.validate()?;
        self.synthesis.validate()?;
        Ok(())
    }

    /// Derive the synthesis confidence normalizer from the extraction
    /// weights, keeping the two sections consistent after tuning.
    pub fn with_derived_normalizer(mut self) -> Self {
        self.synthesis.max_item_weight = self.extraction.max_class_weight();
        self
    }
}
