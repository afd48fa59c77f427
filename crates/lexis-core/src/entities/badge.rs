use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::BadgeRarity;

/// A collectible badge shown on the learner's profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rarity: BadgeRarity,
    #[serde(default)]
    pub icon: String,
    pub earned_at: Option<DateTime<Utc>>,
}
