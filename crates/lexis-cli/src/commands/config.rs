use std::path::Path;

use lexis_config::{LexisConfig, PROJECT_CONFIG_PATH};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConfigCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConfigPath {
    scope: &'static str,
    path: String,
    exists: bool,
}

/// Handle `lexis config`.
pub fn handle(
    action: &ConfigCommands,
    config: &LexisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => output(&config.redacted(), flags.format),
        ConfigCommands::Paths => output(&paths(flags.config.as_deref()), flags.format),
    }
}

fn paths(explicit: Option<&str>) -> Vec<ConfigPath> {
    let entry = |scope, path: &Path| ConfigPath {
        scope,
        path: path.display().to_string(),
        exists: path.exists(),
    };

    if let Some(explicit) = explicit {
        return vec![entry("explicit", Path::new(explicit))];
    }
    let mut paths = Vec::with_capacity(2);
    if let Some(global) = LexisConfig::global_config_path() {
        paths.push(entry("user", &global));
    }
    paths.push(entry("project", Path::new(PROJECT_CONFIG_PATH)));
    paths
}
