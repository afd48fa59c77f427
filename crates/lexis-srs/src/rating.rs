use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SrsError;

/// How well the learner recalled a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub const ALL: [Self; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }

    /// Whether the card counts as recalled.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        !matches!(self, Self::Again)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = SrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" | "1" => Ok(Self::Again),
            "hard" | "2" => Ok(Self::Hard),
            "good" | "3" => Ok(Self::Good),
            "easy" | "4" => Ok(Self::Easy),
            other => Err(SrsError::UnknownRating(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!("Good".parse::<Rating>(), Ok(Rating::Good));
        assert_eq!(" easy ".parse::<Rating>(), Ok(Rating::Easy));
        assert_eq!("1".parse::<Rating>(), Ok(Rating::Again));
        assert_eq!("2".parse::<Rating>(), Ok(Rating::Hard));
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(
            "perfect".parse::<Rating>(),
            Err(SrsError::UnknownRating("perfect".into()))
        );
        assert!("5".parse::<Rating>().is_err());
    }

    #[test]
    fn only_again_fails() {
        assert!(!Rating::Again.is_pass());
        assert!(Rating::Hard.is_pass());
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Rating::Again).unwrap(), "\"again\"");
    }
}
