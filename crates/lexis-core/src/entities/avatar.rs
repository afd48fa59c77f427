use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A selectable profile avatar, gated by level and optionally by premium.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Avatar {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub required_level: u32,
    #[serde(default)]
    pub is_premium: bool,
}

impl Avatar {
    #[must_use]
    pub const fn is_unlocked_for(&self, level: u32, premium: bool) -> bool {
        level >= self.required_level && (premium || !self.is_premium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_avatar_needs_level_and_subscription() {
        let avatar = Avatar {
            id: "av-scribe".into(),
            name: "Scribe".into(),
            image_url: "https://cdn.example/avatars/scribe.png".into(),
            required_level: 5,
            is_premium: true,
        };
        assert!(!avatar.is_unlocked_for(10, false));
        assert!(!avatar.is_unlocked_for(4, true));
        assert!(avatar.is_unlocked_for(5, true));
    }
}
