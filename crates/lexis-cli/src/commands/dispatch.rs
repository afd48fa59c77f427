use anyhow::Context;
use lexis_api::ApiClient;
use lexis_config::LexisConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command that needs configuration.
pub async fn dispatch(
    command: Commands,
    config: &LexisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Config { action } => commands::config::handle(&action, config, flags),
        Commands::Reset { action } => {
            commands::reset::handle(&action, &api_client(config)?, flags).await
        }
        Commands::Lesson { action } => {
            commands::lesson::handle(&action, config, &api_client(config)?, flags).await
        }
        Commands::Chat { action } => {
            commands::chat::handle(&action, config, &api_client(config)?, flags).await
        }
        Commands::Srs { .. } | Commands::Challenge { .. } => {
            unreachable!("srs/challenge are pre-dispatched in main")
        }
    }
}

fn api_client(config: &LexisConfig) -> anyhow::Result<ApiClient> {
    ApiClient::from_config(config).context("failed to build API client")
}
