//! Request and response envelopes exchanged with the Lexis backend.
//!
//! These structs define the JSON shape of the lesson, chat, and password
//! reset endpoints consumed by `lexis-api`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChatCorrection, ChatMessage, GrammarNote, VocabularyItem};
use crate::errors::CoreError;
use crate::lesson::LessonTask;

/// Body of `POST /api/v1/lessons/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonRequest {
    pub language: String,
    pub level: String,
    pub topic: Option<String>,
    pub task_count: u32,
}

/// Lesson-level metadata returned alongside the tasks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonMeta {
    pub lesson_id: Option<String>,
    pub language: String,
    pub level: String,
    pub topic: Option<String>,
    pub title: String,
    #[serde(default)]
    pub estimated_minutes: u32,
    #[serde(default)]
    pub xp_reward: u32,
}

/// Response from `POST /api/v1/lessons/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonResponse {
    pub meta: LessonMeta,
    pub tasks: Vec<LessonTask>,
}

impl LessonResponse {
    /// Validate every task, reporting the first failing task by position.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the lesson has no tasks or any task
    /// breaks its structural constraints.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.tasks.is_empty() {
            return Err(CoreError::Validation("lesson has no tasks".into()));
        }
        for (index, task) in self.tasks.iter().enumerate() {
            task.validate().map_err(|error| match error {
                CoreError::Validation(reason) => {
                    CoreError::Validation(format!("task {index}: {reason}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Task at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` when the lesson has no task at `index`.
    pub fn task(&self, index: usize) -> Result<&LessonTask, CoreError> {
        self.tasks.get(index).ok_or_else(|| CoreError::NotFound {
            entity_type: "task".into(),
            id: format!("{index} (lesson has {} tasks)", self.tasks.len()),
        })
    }
}

/// Body of `POST /api/v1/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatRequest {
    pub persona_id: String,
    pub language: String,
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Response from `POST /api/v1/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
    pub translation: Option<String>,
    #[serde(default)]
    pub grammar_notes: Vec<GrammarNote>,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyItem>,
    #[serde(default)]
    pub corrections: Vec<ChatCorrection>,
}

/// Generic `{ "message": ... }` acknowledgement from the password reset
/// request and confirm endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Response from `GET /api/v1/auth/password-reset/validate-token/{token}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TokenValidation {
    pub valid: bool,
    pub email: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LESSON: &str = r#"{
        "meta": {
            "lesson_id": "les-001",
            "language": "la",
            "level": "beginner",
            "topic": "greetings",
            "title": "Salve!",
            "estimated_minutes": 5,
            "xp_reward": 10
        },
        "tasks": [
            {"type": "multiple_choice", "question": "Salve means?", "options": ["hello", "goodbye"], "answer_index": 0},
            {"type": "translate", "source": "Vale", "answer": "Goodbye"},
            {"type": "true_false", "statement": "Salvete is plural.", "answer": true}
        ]
    }"#;

    #[test]
    fn lesson_response_decodes_and_validates() {
        let lesson: LessonResponse = serde_json::from_str(LESSON).unwrap();
        assert_eq!(lesson.meta.title, "Salve!");
        assert_eq!(lesson.tasks.len(), 3);
        assert!(lesson.validate().is_ok());
    }

    #[test]
    fn validation_reports_task_index() {
        let mut lesson: LessonResponse = serde_json::from_str(LESSON).unwrap();
        lesson.tasks[1] = LessonTask::MultipleChoice {
            question: "?".into(),
            options: vec!["a".into()],
            answer_index: 4,
        };
        let err = lesson.validate().unwrap_err();
        assert!(err.to_string().contains("task 1:"));
    }

    #[test]
    fn empty_lesson_is_invalid() {
        let mut lesson: LessonResponse = serde_json::from_str(LESSON).unwrap();
        lesson.tasks.clear();
        assert!(lesson.validate().is_err());
    }

    #[test]
    fn task_lookup_by_position() {
        let lesson: LessonResponse = serde_json::from_str(LESSON).unwrap();
        assert_eq!(lesson.task(2).unwrap().kind().as_str(), "true_false");

        let err = lesson.task(3).unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound {
                entity_type: "task".into(),
                id: "3 (lesson has 3 tasks)".into(),
            }
        );
        assert_eq!(err.to_string(), "task not found: 3 (lesson has 3 tasks)");
    }

    #[test]
    fn chat_response_tolerates_missing_lists() {
        let chat: ChatResponse = serde_json::from_str(r#"{"reply":"Salve, amice!"}"#).unwrap();
        assert_eq!(chat.reply, "Salve, amice!");
        assert!(chat.grammar_notes.is_empty());
        assert!(chat.translation.is_none());
    }
}
