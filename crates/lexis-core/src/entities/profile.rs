use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DailyGoal, LearningGoal};

/// Choices collected by the onboarding flow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningProfile {
    pub goal: LearningGoal,
    pub daily_goal: DailyGoal,
    pub language: String,
}

impl LearningProfile {
    #[must_use]
    pub const fn weekly_minutes(&self) -> u32 {
        self.daily_goal.minutes() * 7
    }
}
