//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "la".to_string()
}

fn default_level() -> String {
    "beginner".to_string()
}

/// Default number of tasks requested per generated lesson.
const fn default_task_count() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Language code used when a command does not name one (e.g. `la`, `grc`).
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default = "default_level")]
    pub default_level: String,

    #[serde(default = "default_task_count")]
    pub task_count: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_level: default_level(),
            task_count: default_task_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_language, "la");
        assert_eq!(config.default_level, "beginner");
        assert_eq!(config.task_count, 10);
    }
}
