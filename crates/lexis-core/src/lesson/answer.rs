use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{LessonTask, MatchPair};
use crate::errors::CoreError;

/// A learner's response to a [`LessonTask`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TaskAnswer {
    /// Index into the task's `options`.
    Choice(usize),
    /// Typed or transcribed text.
    Text(String),
    Bool(bool),
    /// Ordered tiles or fragments.
    Sequence(Vec<String>),
    Pairs(Vec<MatchPair>),
}

impl TaskAnswer {
    const fn label(&self) -> &'static str {
        match self {
            Self::Choice(_) => "choice",
            Self::Text(_) => "text",
            Self::Bool(_) => "bool",
            Self::Sequence(_) => "sequence",
            Self::Pairs(_) => "pairs",
        }
    }
}

/// Canonical form used for comparing free-text answers: lowercase, inner
/// whitespace collapsed, surrounding punctuation stripped.
#[must_use]
pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .trim()
        .to_lowercase()
}

impl LessonTask {
    /// Check a learner's answer locally.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the answer has the wrong shape for
    /// this task, or when a choice index falls outside the options.
    pub fn check(&self, answer: &TaskAnswer) -> Result<bool, CoreError> {
        match (self, answer) {
            (
                Self::Alphabet {
                    name,
                    transliteration,
                    ..
                },
                TaskAnswer::Text(text),
            ) => Ok(text_eq(text, transliteration) || text_eq(text, name)),
            (Self::Match { pairs }, TaskAnswer::Pairs(given)) => Ok(pairs_eq(pairs, given)),
            (
                Self::Cloze {
                    options, answer, ..
                }
                | Self::Conjugation {
                    options, answer, ..
                }
                | Self::Declension {
                    options, answer, ..
                },
                given,
            ) => match given {
                TaskAnswer::Text(text) => Ok(text_eq(text, answer)),
                TaskAnswer::Choice(index) => {
                    let option = pick(self, options, *index)?;
                    Ok(text_eq(option, answer))
                }
                other => Err(wrong_shape(self, other)),
            },
            (
                Self::Translate {
                    answer, accepted, ..
                },
                TaskAnswer::Text(text),
            ) => Ok(text_eq(text, answer) || accepted.iter().any(|alt| text_eq(text, alt))),
            (
                Self::Grammar {
                    options,
                    answer_index,
                    ..
                }
                | Self::Listening {
                    options,
                    answer_index,
                    ..
                }
                | Self::MultipleChoice {
                    options,
                    answer_index,
                    ..
                }
                | Self::Dialogue {
                    options,
                    answer_index,
                    ..
                }
                | Self::Synonym {
                    options,
                    answer_index,
                    ..
                }
                | Self::ContextMatch {
                    options,
                    answer_index,
                    ..
                }
                | Self::Etymology {
                    options,
                    answer_index,
                    ..
                },
                TaskAnswer::Choice(index),
            ) => {
                pick(self, options, *index)?;
                Ok(index == answer_index)
            }
            (Self::Speaking { target_text, .. }, TaskAnswer::Text(text)) => {
                Ok(text_eq(text, target_text))
            }
            (Self::Dictation { audio_text, .. }, TaskAnswer::Text(text)) => {
                Ok(text_eq(text, audio_text))
            }
            (
                Self::WordBank { answer, .. } | Self::Reorder { answer, .. },
                TaskAnswer::Sequence(given),
            ) => Ok(given.len() == answer.len()
                && given.iter().zip(answer).all(|(g, a)| text_eq(g, a))),
            (Self::TrueFalse { answer, .. }, TaskAnswer::Bool(given)) => Ok(answer == given),
            (task, other) => Err(wrong_shape(task, other)),
        }
    }
}

fn text_eq(a: &str, b: &str) -> bool {
    normalize_text(a) == normalize_text(b)
}

/// Order-insensitive, one-to-one: each given pair can satisfy only one
/// expected pair.
fn pairs_eq(expected: &[MatchPair], given: &[MatchPair]) -> bool {
    if expected.len() != given.len() {
        return false;
    }
    let mut unmatched: Vec<&MatchPair> = given.iter().collect();
    expected.iter().all(|e| {
        unmatched
            .iter()
            .position(|g| text_eq(&g.left, &e.left) && text_eq(&g.right, &e.right))
            .map(|idx| unmatched.swap_remove(idx))
            .is_some()
    })
}

fn pick<'a>(task: &LessonTask, options: &'a [String], index: usize) -> Result<&'a str, CoreError> {
    options.get(index).map(String::as_str).ok_or_else(|| {
        CoreError::Validation(format!(
            "{} task has no option {index} ({} options)",
            task.kind(),
            options.len()
        ))
    })
}

fn wrong_shape(task: &LessonTask, answer: &TaskAnswer) -> CoreError {
    CoreError::Validation(format!(
        "{} task cannot be answered with a {} answer",
        task.kind(),
        answer.label()
    ))
}
