use std::path::Path;

use anyhow::Context;
use lexis_config::LexisConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration, then validate it.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LexisConfig> {
    load_dotenv()?;

    let config = match &flags.config {
        Some(path) => LexisConfig::load_from_file(Path::new(path))
            .with_context(|| format!("failed to load config file {path}"))?,
        None => LexisConfig::load().context("failed to load configuration")?,
    };
    config.validate().context("invalid configuration")?;
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
