//! Entity structs for the Lexis learning domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Derived fields (progress, expiry, time
//! remaining) are methods, never serialized state.

mod achievement;
mod avatar;
mod badge;
mod challenge;
mod chat;
mod language;
mod power_up;
mod profile;
mod reader;
mod vocabulary;

pub use achievement::Achievement;
pub use avatar::Avatar;
pub use badge::Badge;
pub use challenge::DailyChallenge;
pub use chat::{ChatCorrection, ChatMessage, ChatPersona, GrammarNote};
pub use language::Language;
pub use power_up::PowerUp;
pub use profile::LearningProfile;
pub use reader::{ReaderPassage, ReaderText};
pub use vocabulary::VocabularyItem;
