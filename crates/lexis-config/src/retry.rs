//! Retry and backoff settings for backend calls.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Hard ceiling on attempts per call, the first one included.
pub const MAX_ATTEMPTS: u32 = 3;

const fn default_max_attempts() -> u32 {
    MAX_ATTEMPTS
}

const fn default_base_delay_ms() -> u64 {
    1000
}

const fn default_max_delay_ms() -> u64 {
    4000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Total attempts including the first one, between 1 and [`MAX_ATTEMPTS`].
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry; doubles on each further retry.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Upper bound for any single delay.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `max_attempts` is zero or
    /// above [`MAX_ATTEMPTS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ATTEMPTS).contains(&self.max_attempts) {
            return Err(ConfigError::invalid(
                "retry.max_attempts",
                format!("must be between 1 and {MAX_ATTEMPTS}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one_two_four_seconds() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.base_delay_ms, 1000);
        assert_eq!(config.max_delay_ms, 4000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let config = RetryConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn attempts_above_ceiling_are_invalid() {
        for max_attempts in [4, 5, 10] {
            let config = RetryConfig {
                max_attempts,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("between 1 and 3"), "{err}");
        }
    }
}
