use lexis_api::ApiClient;
use lexis_config::LexisConfig;
use lexis_core::responses::ChatRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChatCommands;
use crate::output::output;
use crate::progress::Progress;

/// Handle `lexis chat`.
pub async fn handle(
    action: &ChatCommands,
    config: &LexisConfig,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ChatCommands::Send {
            persona,
            message,
            language,
        } => {
            let request = ChatRequest {
                persona_id: persona.clone(),
                language: language
                    .clone()
                    .unwrap_or_else(|| config.general.default_language.clone()),
                message: message.clone(),
                history: Vec::new(),
            };
            let reply = Progress::wrap(
                "Waiting for reply...",
                "chat failed",
                client.send_chat(&request),
            )
            .await?;
            output(&reply, flags.format)
        }
    }
}
