use clap::Subcommand;

/// Password reset commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResetCommands {
    /// Email a reset link.
    Request {
        #[arg(long)]
        email: String,
    },
    /// Check whether a reset token is still valid.
    Validate { token: String },
    /// Set a new password with a reset token.
    Confirm {
        #[arg(long)]
        token: String,
        /// At least 8 characters, with a letter and a digit.
        #[arg(long)]
        password: String,
    },
}
