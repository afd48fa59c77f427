use thiserror::Error;

/// Failures while loading or checking Lexis configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed to parse, or the merged value did not fit `LexisConfig`.
    #[error("config load failed: {0}")]
    Figment(#[from] figment::Error),

    #[error("config section '{section}' is missing or empty")]
    NotConfigured { section: String },

    #[error("config value '{field}' rejected: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
