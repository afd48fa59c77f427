use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::VocabularyItem;

/// A graded reading text split into passages with parallel translations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReaderText {
    pub id: String,
    pub language: String,
    pub title: String,
    pub author: Option<String>,
    pub level: String,
    pub passages: Vec<ReaderPassage>,
    #[serde(default)]
    pub glossary: Vec<VocabularyItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReaderPassage {
    pub text: String,
    pub translation: Option<String>,
}

impl ReaderText {
    /// Whitespace-delimited word count over all passages (original text only).
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.passages
            .iter()
            .map(|p| p.text.split_whitespace().count())
            .sum()
    }
}
