use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AchievementCategory;
use crate::progress;

/// A long-running milestone (e.g. "learn 100 words") that unlocks once.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: AchievementCategory,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub xp_reward: u32,
    #[serde(default)]
    pub progress: i64,
    pub target: i64,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        progress::fraction(self.progress, self.target)
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_follows_timestamp() {
        let mut a = Achievement {
            id: "ach-words-100".into(),
            title: "Centurion".into(),
            description: "Learn 100 words".into(),
            category: AchievementCategory::Learning,
            icon: "laurel".into(),
            xp_reward: 100,
            progress: 140,
            target: 100,
            unlocked_at: None,
        };
        assert!(!a.is_unlocked());
        assert!((a.progress_fraction() - 1.0).abs() < f64::EPSILON);

        a.unlocked_at = Some(Utc::now());
        assert!(a.is_unlocked());
    }
}
