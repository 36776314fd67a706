/// Load-time configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be at least 1")]
    ZeroCap { name: &'static str },

    #[error("primary threshold {primary} must not be below secondary threshold {secondary}")]
    ThresholdOrder { primary: f64, secondary: f64 },
}
