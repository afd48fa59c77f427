use std::path::PathBuf;

use clap::Subcommand;

/// Daily challenge commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChallengeCommands {
    /// Progress, expiry and time remaining for challenges in a JSON file
    /// (one challenge or an array).
    Status { file: PathBuf },
}
