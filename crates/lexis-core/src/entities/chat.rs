use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChatRole;

/// A historical conversation partner the learner can chat with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatPersona {
    pub id: String,
    pub name: String,
    pub language: String,
    pub era: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub greeting: String,
}

/// One turn of a chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub sent_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            sent_at: Some(Utc::now()),
        }
    }
}

/// A grammar explanation attached to a chat reply.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GrammarNote {
    pub title: String,
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// A correction of the learner's last message.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatCorrection {
    pub original: String,
    pub corrected: String,
    pub explanation: Option<String>,
}
