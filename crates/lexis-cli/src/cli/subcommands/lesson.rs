use std::path::PathBuf;

use clap::Subcommand;

/// Lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// Ask the backend for a new lesson.
    Generate {
        /// Language code (defaults to `general.default_language`).
        #[arg(long)]
        language: Option<String>,
        /// Defaults to `general.default_level`.
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        topic: Option<String>,
        /// Number of tasks (defaults to `general.task_count`).
        #[arg(long)]
        count: Option<u32>,
        /// Also write the lesson JSON to this file.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Decode and validate a lesson JSON file and summarize its tasks.
    Inspect { file: PathBuf },
    /// Check an answer to one task of a lesson JSON file.
    Check {
        file: PathBuf,
        /// Zero-based task position.
        #[arg(long)]
        task: usize,
        /// Answer as JSON, e.g. `{"kind":"choice","value":1}`.
        #[arg(long)]
        answer: String,
    },
}

impl LessonCommands {
    /// Whether the command talks to the backend.
    #[must_use]
    pub const fn needs_backend(&self) -> bool {
        matches!(self, Self::Generate { .. })
    }
}
