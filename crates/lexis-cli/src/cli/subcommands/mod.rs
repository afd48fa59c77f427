mod challenge;
mod chat;
mod config;
mod lesson;
mod reset;
mod srs;

pub use challenge::ChallengeCommands;
pub use chat::ChatCommands;
pub use config::ConfigCommands;
pub use lesson::LessonCommands;
pub use reset::ResetCommands;
pub use srs::SrsCommands;
