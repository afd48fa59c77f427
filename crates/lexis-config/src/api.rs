//! Backend API connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("lexis/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend root, e.g. `https://api.lexis.example`. Paths such as
    /// `/api/v1/chat` are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Bearer token sent with every request when set.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            auth_token: None,
        }
    }
}

impl ApiConfig {
    /// Check if a base URL is present.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Whether requests will carry a bearer token.
    pub fn has_auth_token(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Base URL without trailing slashes.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the base URL is empty and
    /// `ConfigError::InvalidValue` for a non-http(s) URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
            });
        }
        let url = self.base_url_trimmed();
        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match host {
            None => {
                return Err(ConfigError::invalid(
                    "api.base_url",
                    format!("'{url}' must start with http:// or https://"),
                ));
            }
            Some("") => {
                return Err(ConfigError::invalid("api.base_url", "missing host"));
            }
            Some(_) => {}
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("lexis/"));
        assert!(!config.has_auth_token());
        assert!(config.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url_trimmed(), "https://api.example.com");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let config = ApiConfig {
            base_url: "ftp://api.example.com".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn rejects_missing_host_and_zero_timeout() {
        let no_host = ApiConfig {
            base_url: "https://".into(),
            ..Default::default()
        };
        assert!(no_host.validate().is_err());

        let no_timeout = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            no_timeout.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.timeout_secs"
        ));
    }

    #[test]
    fn empty_base_url_is_not_configured() {
        let config = ApiConfig {
            base_url: "  ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let config = ApiConfig {
            auth_token: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_auth_token());
    }
}
