use clap::Subcommand;

use crate::cli::subcommands::{
    ChallengeCommands, ChatCommands, ConfigCommands, LessonCommands, ResetCommands, SrsCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Flashcard review intervals.
    Srs {
        #[command(subcommand)]
        action: SrsCommands,
    },
    /// Password reset flow.
    Reset {
        #[command(subcommand)]
        action: ResetCommands,
    },
    /// Generate, inspect and check lessons.
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Talk to a historical persona.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Daily challenge progress.
    Challenge {
        #[command(subcommand)]
        action: ChallengeCommands,
    },
    /// Effective configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}
