//! Fieldless enums for the Lexis learning domain.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so the wire names match the backend's JSON payloads. `as_str()` returns the
//! same string the serializer emits.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ChallengeType
// ---------------------------------------------------------------------------

/// What a daily challenge asks the learner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeType {
    CompleteLessons,
    EarnXp,
    PerfectLessons,
    ReviewWords,
    PracticeMinutes,
    Streak,
}

impl ChallengeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompleteLessons => "complete_lessons",
            Self::EarnXp => "earn_xp",
            Self::PerfectLessons => "perfect_lessons",
            Self::ReviewWords => "review_words",
            Self::PracticeMinutes => "practice_minutes",
            Self::Streak => "streak",
        }
    }

    /// Unit noun used when rendering progress (`3/5 lessons`).
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::CompleteLessons | Self::PerfectLessons => "lessons",
            Self::EarnXp => "xp",
            Self::ReviewWords => "words",
            Self::PracticeMinutes => "minutes",
            Self::Streak => "days",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty tier of a daily challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AchievementCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Learning,
    Streak,
    Mastery,
    Social,
    Exploration,
}

impl AchievementCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Learning => "learning",
            Self::Streak => "streak",
            Self::Mastery => "mastery",
            Self::Social => "social",
            Self::Exploration => "exploration",
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BadgeRarity
// ---------------------------------------------------------------------------

/// Rarity tier of a badge, ordered from most to least common.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for BadgeRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PowerUpKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    StreakFreeze,
    DoubleXp,
    Hint,
    SkipQuestion,
    HeartRefill,
}

impl PowerUpKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StreakFreeze => "streak_freeze",
            Self::DoubleXp => "double_xp",
            Self::Hint => "hint",
            Self::SkipQuestion => "skip_question",
            Self::HeartRefill => "heart_refill",
        }
    }

    /// Whether activating this power-up starts a timed window
    /// (as opposed to being consumed on use).
    #[must_use]
    pub const fn is_timed(self) -> bool {
        matches!(self, Self::DoubleXp | Self::StreakFreeze)
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChatRole
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TextDirection
// ---------------------------------------------------------------------------

/// Writing direction of a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LearningGoal / DailyGoal
// ---------------------------------------------------------------------------

/// Why the learner picked up the language (chosen during onboarding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LearningGoal {
    Scripture,
    Literature,
    History,
    Linguistics,
    Fun,
}

impl LearningGoal {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scripture => "scripture",
            Self::Literature => "literature",
            Self::History => "history",
            Self::Linguistics => "linguistics",
            Self::Fun => "fun",
        }
    }
}

impl fmt::Display for LearningGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily practice commitment chosen during onboarding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DailyGoal {
    Casual,
    Regular,
    Serious,
    Intense,
}

impl DailyGoal {
    /// Minutes of practice per day.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Casual => 5,
            Self::Regular => 10,
            Self::Serious => 15,
            Self::Intense => 20,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Regular => "regular",
            Self::Serious => "serious",
            Self::Intense => "intense",
        }
    }
}

impl fmt::Display for DailyGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskKind
// ---------------------------------------------------------------------------

/// Exercise type of a lesson task. Mirrors the `"type"` tag of
/// [`LessonTask`](crate::lesson::LessonTask) without carrying the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Alphabet,
    Match,
    Cloze,
    Translate,
    Grammar,
    Listening,
    Speaking,
    WordBank,
    TrueFalse,
    MultipleChoice,
    Dialogue,
    Conjugation,
    Declension,
    Synonym,
    ContextMatch,
    Reorder,
    Dictation,
    Etymology,
}

impl TaskKind {
    pub const ALL: [Self; 18] = [
        Self::Alphabet,
        Self::Match,
        Self::Cloze,
        Self::Translate,
        Self::Grammar,
        Self::Listening,
        Self::Speaking,
        Self::WordBank,
        Self::TrueFalse,
        Self::MultipleChoice,
        Self::Dialogue,
        Self::Conjugation,
        Self::Declension,
        Self::Synonym,
        Self::ContextMatch,
        Self::Reorder,
        Self::Dictation,
        Self::Etymology,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphabet => "alphabet",
            Self::Match => "match",
            Self::Cloze => "cloze",
            Self::Translate => "translate",
            Self::Grammar => "grammar",
            Self::Listening => "listening",
            Self::Speaking => "speaking",
            Self::WordBank => "word_bank",
            Self::TrueFalse => "true_false",
            Self::MultipleChoice => "multiple_choice",
            Self::Dialogue => "dialogue",
            Self::Conjugation => "conjugation",
            Self::Declension => "declension",
            Self::Synonym => "synonym",
            Self::ContextMatch => "context_match",
            Self::Reorder => "reorder",
            Self::Dictation => "dictation",
            Self::Etymology => "etymology",
        }
    }

    /// Whether the task needs audio playback or recording on the client.
    #[must_use]
    pub const fn uses_audio(self) -> bool {
        matches!(self, Self::Listening | Self::Speaking | Self::Dictation)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        challenge_earn_xp,
        ChallengeType,
        ChallengeType::EarnXp,
        "earn_xp"
    );
    test_serde_roundtrip!(
        challenge_practice_minutes,
        ChallengeType,
        ChallengeType::PracticeMinutes,
        "practice_minutes"
    );
    test_serde_roundtrip!(difficulty_hard, Difficulty, Difficulty::Hard, "hard");
    test_serde_roundtrip!(
        rarity_legendary,
        BadgeRarity,
        BadgeRarity::Legendary,
        "legendary"
    );
    test_serde_roundtrip!(
        power_up_streak_freeze,
        PowerUpKind,
        PowerUpKind::StreakFreeze,
        "streak_freeze"
    );
    test_serde_roundtrip!(direction_rtl, TextDirection, TextDirection::Rtl, "rtl");
    test_serde_roundtrip!(goal_intense, DailyGoal, DailyGoal::Intense, "intense");
    test_serde_roundtrip!(task_word_bank, TaskKind, TaskKind::WordBank, "word_bank");
    test_serde_roundtrip!(
        task_context_match,
        TaskKind,
        TaskKind::ContextMatch,
        "context_match"
    );

    #[test]
    fn task_kind_as_str_matches_serde_for_all_variants() {
        for kind in TaskKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn badge_rarity_orders_common_to_legendary() {
        assert!(BadgeRarity::Common < BadgeRarity::Rare);
        assert!(BadgeRarity::Epic < BadgeRarity::Legendary);
    }

    #[test]
    fn daily_goal_minutes() {
        assert_eq!(DailyGoal::Casual.minutes(), 5);
        assert_eq!(DailyGoal::Regular.minutes(), 10);
        assert_eq!(DailyGoal::Serious.minutes(), 15);
        assert_eq!(DailyGoal::Intense.minutes(), 20);
    }

    #[test]
    fn audio_tasks() {
        assert!(TaskKind::Listening.uses_audio());
        assert!(TaskKind::Dictation.uses_audio());
        assert!(!TaskKind::Cloze.uses_audio());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ChallengeType::ReviewWords), "review_words");
        assert_eq!(format!("{}", Difficulty::Medium), "medium");
        assert_eq!(format!("{}", AchievementCategory::Mastery), "mastery");
        assert_eq!(format!("{}", PowerUpKind::DoubleXp), "double_xp");
        assert_eq!(format!("{}", ChatRole::Assistant), "assistant");
        assert_eq!(format!("{}", LearningGoal::Scripture), "scripture");
        assert_eq!(format!("{}", TaskKind::TrueFalse), "true_false");
    }
}
