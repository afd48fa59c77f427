use std::path::PathBuf;

use clap::Subcommand;
use lexis_srs::Rating;

/// Spaced-repetition commands. Ratings accept `again|hard|good|easy` or `1-4`.
#[derive(Clone, Debug, Subcommand)]
pub enum SrsCommands {
    /// Next interval for one rating.
    Next {
        /// Current interval in days.
        #[arg(long, default_value_t = 1)]
        interval: u32,
        #[arg(long, default_value_t = lexis_srs::DEFAULT_EASE)]
        ease: f64,
        #[arg(long)]
        rating: Rating,
    },
    /// Next interval for every rating, with display labels.
    Preview {
        #[arg(long, default_value_t = 1)]
        interval: u32,
        #[arg(long, default_value_t = lexis_srs::DEFAULT_EASE)]
        ease: f64,
    },
    /// Apply a rating to a flashcard stored as JSON.
    Review {
        /// Flashcard JSON file.
        #[arg(long)]
        card: PathBuf,
        #[arg(long)]
        rating: Rating,
        /// Save the updated card back to the file.
        #[arg(long)]
        write: bool,
    },
}
