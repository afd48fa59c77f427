use lexis_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResetCommands;
use crate::output::output;
use crate::progress::Progress;

/// Handle `lexis reset`.
pub async fn handle(
    action: &ResetCommands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResetCommands::Request { email } => {
            let ack = Progress::wrap(
                "Requesting password reset...",
                "password reset request failed",
                client.request_password_reset(email),
            )
            .await?;
            output(&ack, flags.format)
        }
        ResetCommands::Validate { token } => {
            let validation = Progress::wrap(
                "Checking reset token...",
                "token check failed",
                client.validate_reset_token(token),
            )
            .await?;
            output(&validation, flags.format)
        }
        ResetCommands::Confirm { token, password } => {
            let ack = Progress::wrap(
                "Setting new password...",
                "password reset failed",
                client.confirm_password_reset(token, password),
            )
            .await?;
            output(&ack, flags.format)
        }
    }
}
