use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PowerUpKind;

/// An owned stack of a power-up in the learner's inventory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    #[serde(default)]
    pub quantity: u32,
    pub cost_coins: u32,
    /// Length of the effect window for timed power-ups.
    pub duration_minutes: Option<u32>,
    /// End of the current effect window, if one is running.
    pub active_until: Option<DateTime<Utc>>,
}

impl PowerUp {
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.active_until.is_some_and(|until| now < until)
    }
}
