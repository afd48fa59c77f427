//! Lesson tasks: the closed set of exercise shapes a lesson is built from.
//!
//! Each task arrives from the backend as a flat JSON object whose `"type"`
//! field selects exactly one variant of [`LessonTask`]. Unknown tags fail to
//! decode.

mod answer;

pub use answer::{TaskAnswer, normalize_text};

use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskKind;
use crate::errors::CoreError;

/// A left/right pair in a matching exercise.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

/// One spoken line in a dialogue exercise.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
    pub translation: Option<String>,
}

/// A single exercise inside a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LessonTask {
    /// Introduces one letter of the script.
    Alphabet {
        letter: String,
        name: String,
        transliteration: String,
        example_word: Option<String>,
        audio_url: Option<String>,
    },
    /// Connect each left item with its right counterpart.
    Match { pairs: Vec<MatchPair> },
    /// Fill the blank (`___`) in a sentence.
    Cloze {
        sentence: String,
        #[serde(default)]
        options: Vec<String>,
        answer: String,
        translation: Option<String>,
    },
    /// Free-text translation; `accepted` lists alternative correct answers.
    Translate {
        source: String,
        answer: String,
        #[serde(default)]
        accepted: Vec<String>,
        #[serde(default)]
        hints: Vec<String>,
    },
    Grammar {
        question: String,
        options: Vec<String>,
        answer_index: usize,
        explanation: Option<String>,
    },
    Listening {
        audio_text: String,
        audio_url: Option<String>,
        options: Vec<String>,
        answer_index: usize,
    },
    Speaking {
        prompt: String,
        target_text: String,
        transliteration: Option<String>,
    },
    /// Build the answer from a bank of word tiles.
    WordBank {
        prompt: String,
        words: Vec<String>,
        answer: Vec<String>,
    },
    TrueFalse {
        statement: String,
        answer: bool,
        explanation: Option<String>,
    },
    MultipleChoice {
        question: String,
        options: Vec<String>,
        answer_index: usize,
    },
    Dialogue {
        lines: Vec<DialogueLine>,
        question: String,
        options: Vec<String>,
        answer_index: usize,
    },
    Conjugation {
        verb: String,
        tense: String,
        person: String,
        answer: String,
        #[serde(default)]
        options: Vec<String>,
    },
    Declension {
        noun: String,
        case: String,
        number: String,
        answer: String,
        #[serde(default)]
        options: Vec<String>,
    },
    Synonym {
        word: String,
        options: Vec<String>,
        answer_index: usize,
    },
    ContextMatch {
        context: String,
        word: String,
        options: Vec<String>,
        answer_index: usize,
    },
    /// Put shuffled fragments back in order.
    Reorder {
        fragments: Vec<String>,
        answer: Vec<String>,
        translation: Option<String>,
    },
    /// Write down what the audio says; the expected text is `audio_text`.
    Dictation {
        audio_text: String,
        audio_url: Option<String>,
    },
    Etymology {
        word: String,
        question: String,
        options: Vec<String>,
        answer_index: usize,
        explanation: Option<String>,
    },
}

impl LessonTask {
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        match self {
            Self::Alphabet { .. } => TaskKind::Alphabet,
            Self::Match { .. } => TaskKind::Match,
            Self::Cloze { .. } => TaskKind::Cloze,
            Self::Translate { .. } => TaskKind::Translate,
            Self::Grammar { .. } => TaskKind::Grammar,
            Self::Listening { .. } => TaskKind::Listening,
            Self::Speaking { .. } => TaskKind::Speaking,
            Self::WordBank { .. } => TaskKind::WordBank,
            Self::TrueFalse { .. } => TaskKind::TrueFalse,
            Self::MultipleChoice { .. } => TaskKind::MultipleChoice,
            Self::Dialogue { .. } => TaskKind::Dialogue,
            Self::Conjugation { .. } => TaskKind::Conjugation,
            Self::Declension { .. } => TaskKind::Declension,
            Self::Synonym { .. } => TaskKind::Synonym,
            Self::ContextMatch { .. } => TaskKind::ContextMatch,
            Self::Reorder { .. } => TaskKind::Reorder,
            Self::Dictation { .. } => TaskKind::Dictation,
            Self::Etymology { .. } => TaskKind::Etymology,
        }
    }

    /// The headline text shown to the learner for this task. A reorder task
    /// without a translation shows its fragments, space separated.
    #[must_use]
    pub fn prompt(&self) -> Cow<'_, str> {
        let text: &str = match self {
            Self::Alphabet { letter, .. } => letter,
            Self::Match { pairs } => pairs.first().map_or("", |p| p.left.as_str()),
            Self::Cloze { sentence, .. } => sentence,
            Self::Translate { source, .. } => source,
            Self::Grammar { question, .. }
            | Self::MultipleChoice { question, .. }
            | Self::Dialogue { question, .. }
            | Self::Etymology { question, .. } => question,
            Self::Listening { audio_text, .. } | Self::Dictation { audio_text, .. } => audio_text,
            Self::Speaking { prompt, .. } | Self::WordBank { prompt, .. } => prompt,
            Self::TrueFalse { statement, .. } => statement,
            Self::Conjugation { verb, .. } => verb,
            Self::Declension { noun, .. } => noun,
            Self::Synonym { word, .. } => word,
            Self::ContextMatch { context, .. } => context,
            Self::Reorder {
                translation: Some(translation),
                ..
            } => translation,
            Self::Reorder {
                fragments,
                translation: None,
                ..
            } => return Cow::Owned(fragments.join(" ")),
        };
        Cow::Borrowed(text)
    }

    /// Check the structural constraints the backend promises but the client
    /// cannot take for granted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the task kind and the broken
    /// constraint.
    pub fn validate(&self) -> Result<(), CoreError> {
        let kind = self.kind();
        match self {
            Self::Alphabet { letter, .. } => non_empty_text(kind, "letter", letter),
            Self::Match { pairs } => {
                if pairs.is_empty() {
                    return Err(invalid(kind, "has no pairs"));
                }
                if pairs
                    .iter()
                    .any(|p| p.left.trim().is_empty() || p.right.trim().is_empty())
                {
                    return Err(invalid(kind, "has a pair with an empty side"));
                }
                Ok(())
            }
            Self::Cloze {
                options, answer, ..
            }
            | Self::Conjugation {
                options, answer, ..
            }
            | Self::Declension {
                options, answer, ..
            } => {
                non_empty_text(kind, "answer", answer)?;
                if !options.is_empty() && !options.iter().any(|o| texts_match(o, answer)) {
                    return Err(invalid(kind, "answer is not among the options"));
                }
                Ok(())
            }
            Self::Translate { answer, .. } => non_empty_text(kind, "answer", answer),
            Self::Speaking { target_text, .. } => non_empty_text(kind, "target_text", target_text),
            Self::Dictation { audio_text, .. } => non_empty_text(kind, "audio_text", audio_text),
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
            } => index_in_bounds(kind, options, *answer_index),
            Self::Dialogue {
                lines,
                options,
                answer_index,
                ..
            } => {
                if lines.is_empty() {
                    return Err(invalid(kind, "has no dialogue lines"));
                }
                index_in_bounds(kind, options, *answer_index)
            }
            Self::WordBank { words, answer, .. } => {
                if answer.is_empty() {
                    return Err(invalid(kind, "has an empty answer"));
                }
                if !is_sub_multiset(answer, words) {
                    return Err(invalid(kind, "answer uses words not in the bank"));
                }
                Ok(())
            }
            Self::Reorder {
                fragments, answer, ..
            } => {
                if fragments.is_empty() {
                    return Err(invalid(kind, "has no fragments"));
                }
                if fragments.len() != answer.len() || !is_sub_multiset(answer, fragments) {
                    return Err(invalid(kind, "answer is not a reordering of the fragments"));
                }
                Ok(())
            }
            Self::TrueFalse { .. } => Ok(()),
        }
    }
}

fn invalid(kind: TaskKind, reason: &str) -> CoreError {
    CoreError::Validation(format!("{kind} task {reason}"))
}

fn non_empty_text(kind: TaskKind, field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(invalid(kind, &format!("has an empty {field}")));
    }
    Ok(())
}

fn index_in_bounds(kind: TaskKind, options: &[String], index: usize) -> Result<(), CoreError> {
    if options.is_empty() {
        return Err(invalid(kind, "has no options"));
    }
    if index >= options.len() {
        return Err(invalid(
            kind,
            &format!(
                "answer_index {index} is out of bounds for {} options",
                options.len()
            ),
        ));
    }
    Ok(())
}

fn texts_match(a: &str, b: &str) -> bool {
    normalize_text(a) == normalize_text(b)
}

/// Every item of `needle` can be drawn from `pool` without reuse.
fn is_sub_multiset(needle: &[String], pool: &[String]) -> bool {
    let mut remaining: Vec<String> = pool.iter().map(|w| normalize_text(w)).collect();
    needle.iter().all(|word| {
        let word = normalize_text(word);
        remaining
            .iter()
            .position(|candidate| *candidate == word)
            .map(|idx| remaining.swap_remove(idx))
            .is_some()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn multiple_choice(index: usize) -> LessonTask {
        LessonTask::MultipleChoice {
            question: "What does 'aqua' mean?".into(),
            options: vec!["fire".into(), "water".into(), "earth".into()],
            answer_index: index,
        }
    }

    #[test]
    fn tag_selects_variant() {
        let task: LessonTask = serde_json::from_str(
            r#"{"type":"true_false","statement":"Roma in Italia est.","answer":true}"#,
        )
        .unwrap();
        assert_eq!(task.kind(), TaskKind::TrueFalse);
        assert!(matches!(
            task,
            LessonTask::TrueFalse {
                answer: true,
                explanation: None,
                ..
            }
        ));
    }

    #[test]
    fn unknown_tag_fails_to_decode() {
        let result: Result<LessonTask, _> =
            serde_json::from_str(r#"{"type":"crossword","clues":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_tag_fails_to_decode() {
        let result: Result<LessonTask, _> =
            serde_json::from_str(r#"{"question":"?","options":["a"],"answer_index":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn tag_serializes_with_snake_case() {
        let json = serde_json::to_value(LessonTask::WordBank {
            prompt: "I love Rome".into(),
            words: vec!["Romam".into(), "amo".into(), "aqua".into()],
            answer: vec!["Romam".into(), "amo".into()],
        })
        .unwrap();
        assert_eq!(json["type"], "word_bank");
    }

    #[test]
    fn kind_matches_serialized_tag() {
        let tasks = vec![
            multiple_choice(1),
            LessonTask::ContextMatch {
                context: "Caesar ___ Rubiconem.".into(),
                word: "transiit".into(),
                options: vec!["transiit".into(), "dormit".into()],
                answer_index: 0,
            },
            LessonTask::Dictation {
                audio_text: "veni vidi vici".into(),
                audio_url: None,
            },
        ];
        for task in tasks {
            let json = serde_json::to_value(&task).unwrap();
            assert_eq!(json["type"], task.kind().as_str());
        }
    }

    #[test]
    fn validate_accepts_in_bounds_choice() {
        assert!(multiple_choice(2).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_bounds_choice() {
        let err = multiple_choice(3).validate().unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn validate_rejects_empty_options() {
        let task = LessonTask::Synonym {
            word: "magnus".into(),
            options: Vec::new(),
            answer_index: 0,
        };
        assert!(task.validate().unwrap_err().to_string().contains("no options"));
    }

    #[test]
    fn validate_word_bank_answer_must_come_from_bank() {
        let ok = LessonTask::WordBank {
            prompt: "the girl sings".into(),
            words: vec!["puella".into(), "cantat".into(), "puer".into()],
            answer: vec!["puella".into(), "cantat".into()],
        };
        assert!(ok.validate().is_ok());

        let reused = LessonTask::WordBank {
            prompt: "the girl sings".into(),
            words: vec!["puella".into(), "cantat".into()],
            answer: vec!["puella".into(), "puella".into()],
        };
        assert!(reused.validate().is_err());
    }

    #[test]
    fn validate_reorder_requires_permutation() {
        let ok = LessonTask::Reorder {
            fragments: vec!["est".into(), "Gallia".into(), "divisa".into()],
            answer: vec!["Gallia".into(), "est".into(), "divisa".into()],
            translation: None,
        };
        assert!(ok.validate().is_ok());

        let short = LessonTask::Reorder {
            fragments: vec!["est".into(), "Gallia".into(), "divisa".into()],
            answer: vec!["Gallia".into(), "est".into()],
            translation: None,
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn validate_cloze_answer_among_options() {
        let task = LessonTask::Cloze {
            sentence: "Puella ___ cantat.".into(),
            options: vec!["bene".into(), "male".into()],
            answer: "saepe".into(),
            translation: None,
        };
        assert!(
            task.validate()
                .unwrap_err()
                .to_string()
                .contains("not among the options")
        );
    }

    #[test]
    fn validate_match_rejects_empty_side() {
        let task = LessonTask::Match {
            pairs: vec![MatchPair {
                left: "rex".into(),
                right: "  ".into(),
            }],
        };
        assert!(task.validate().is_err());
    }

    #[test]
    fn prompt_picks_headline_field() {
        assert_eq!(multiple_choice(0).prompt(), "What does 'aqua' mean?");
        let task = LessonTask::Declension {
            noun: "rosa".into(),
            case: "genitive".into(),
            number: "plural".into(),
            answer: "rosarum".into(),
            options: Vec::new(),
        };
        assert_eq!(task.prompt(), "rosa");
    }

    #[test]
    fn reorder_prompt_falls_back_to_fragments() {
        let mut task = LessonTask::Reorder {
            fragments: vec!["vici".into(), "veni".into(), "vidi".into()],
            answer: vec!["veni".into(), "vidi".into(), "vici".into()],
            translation: None,
        };
        assert_eq!(task.prompt(), "vici veni vidi");

        if let LessonTask::Reorder { translation, .. } = &mut task {
            *translation = Some("I came, I saw, I conquered".into());
        }
        assert_eq!(task.prompt(), "I came, I saw, I conquered");
    }
}
