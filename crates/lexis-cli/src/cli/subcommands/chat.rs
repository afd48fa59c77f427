use clap::Subcommand;

/// Persona chat commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Send one message and print the persona's reply.
    Send {
        #[arg(long)]
        persona: String,
        #[arg(long)]
        message: String,
        /// Defaults to `general.default_language`.
        #[arg(long)]
        language: Option<String>,
    },
}
