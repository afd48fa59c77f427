//! Lexis client configuration.
//!
//! Values are merged from four layers, later ones overriding earlier ones:
//! built-in defaults, `~/.config/lexis/config.toml`, `.lexis/config.toml` in
//! the working directory, then `LEXIS_*` environment variables. A double
//! underscore descends into a section, so `LEXIS_API__BASE_URL` sets
//! `api.base_url` and `LEXIS_RETRY__MAX_ATTEMPTS` sets `retry.max_attempts`.
//!
//! ```no_run
//! use lexis_config::LexisConfig;
//!
//! let config = LexisConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod retry;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use retry::{MAX_ATTEMPTS, RetryConfig};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variable prefix for every config key.
pub const ENV_PREFIX: &str = "LEXIS_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".lexis/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexisConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LexisConfig {
    /// Merge every layer. `.env` files are not read here; see
    /// [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Read the nearest `.env` into the process environment, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::read_dotenv();
        Self::load()
    }

    /// Load using an explicit TOML file in place of the project-local one.
    /// Environment variables still win over the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` if the file does not exist, or
    /// `ConfigError::Figment` if it cannot be parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotConfigured {
                section: path.display().to_string(),
            });
        }
        let figment = Self::defaults().merge(Toml::file(path));
        Ok(Self::with_env(figment).extract()?)
    }

    /// The full provider chain, unextracted.
    pub fn figment() -> Figment {
        let mut figment = Self::defaults();
        for path in Self::search_paths() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }
        Self::with_env(figment)
    }

    /// TOML files consulted by [`Self::figment`], lowest priority first.
    #[must_use]
    pub fn search_paths() -> Vec<PathBuf> {
        Self::global_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(PROJECT_CONFIG_PATH)))
            .collect()
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn with_env(figment: Figment) -> Figment {
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every section for values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` or
    /// `ConfigError::NotConfigured` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.retry.validate()?;
        if self.general.task_count == 0 {
            return Err(ConfigError::invalid(
                "general.task_count",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Copy with the auth token masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api.has_auth_token() {
            copy.api.auth_token = Some("********".into());
        }
        copy
    }

    /// `<config dir>/lexis/config.toml`, when the platform has a config dir.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexis").join("config.toml"))
    }

    /// Under cargo, look for `.env` from the crate dir up to the workspace
    /// root; otherwise search from the current directory. A missing file is
    /// not an error.
    fn read_dotenv() {
        if let Some(manifest_dir) = std::env::var_os("CARGO_MANIFEST_DIR") {
            let found = Path::new(&manifest_dir)
                .ancestors()
                .take(3)
                .map(|dir| dir.join(".env"))
                .find(|candidate| candidate.is_file());
            if let Some(env_file) = found {
                let _ = dotenvy::from_path(env_file);
                return;
            }
        }
        let _ = dotenvy::dotenv();
    }
}
