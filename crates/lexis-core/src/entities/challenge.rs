use chrono::{DateTime, TimeDelta, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ChallengeType, Difficulty};
use crate::progress;

/// A time-boxed daily goal with a reward on completion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyChallenge {
    pub id: String,
    pub challenge_type: ChallengeType,
    pub difficulty: Difficulty,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_value: i64,
    #[serde(default)]
    pub current_value: i64,
    #[serde(default)]
    pub xp_reward: u32,
    #[serde(default)]
    pub coin_reward: u32,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

impl DailyChallenge {
    /// Progress toward the target, clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        progress::fraction(self.current_value, self.target_value)
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress::percent(self.current_value, self.target_value)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed || (self.target_value > 0 && self.current_value >= self.target_value)
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Time left before expiry, never negative.
    #[must_use]
    pub fn time_remaining_at(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.expires_at - now).max(TimeDelta::zero())
    }

    #[must_use]
    pub fn time_remaining(&self) -> TimeDelta {
        self.time_remaining_at(Utc::now())
    }

    /// Compact countdown label: `"5h 12m"`, `"12m"`, `"<1m"` or `"expired"`.
    #[must_use]
    pub fn time_remaining_label_at(&self, now: DateTime<Utc>) -> String {
        if self.is_expired_at(now) {
            return "expired".to_string();
        }
        let remaining = self.time_remaining_at(now);
        let hours = remaining.num_hours();
        let minutes = remaining.num_minutes() % 60;
        match (hours, minutes) {
            (0, 0) => "<1m".to_string(),
            (0, m) => format!("{m}m"),
            (h, m) => format!("{h}h {m}m"),
        }
    }
}
