use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single vocabulary entry in a target language.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VocabularyItem {
    pub id: String,
    /// Language code, e.g. `la`, `grc`.
    pub language: String,
    pub word: String,
    pub transliteration: Option<String>,
    pub translation: String,
    pub part_of_speech: Option<String>,
    pub example: Option<String>,
    pub example_translation: Option<String>,
}
