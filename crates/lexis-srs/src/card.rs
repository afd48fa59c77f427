use chrono::{DateTime, TimeDelta, Utc};
use lexis_core::entities::VocabularyItem;
use serde::{Deserialize, Serialize};

use crate::error::SrsError;
use crate::interval::{DEFAULT_EASE, checked_ease, interval_label, next_interval};
use crate::rating::Rating;

const fn default_ease() -> f64 {
    DEFAULT_EASE
}

const fn default_interval() -> u32 {
    1
}

/// Review state of one word pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    /// Current interval in days (at least 1).
    #[serde(default = "default_interval")]
    pub interval_days: u32,
    /// Consecutive successful reviews.
    #[serde(default)]
    pub repetitions: u32,
    #[serde(default = "default_ease")]
    pub ease_factor: f64,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
}

/// Result of applying a rating to a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewOutcome {
    pub rating: Rating,
    pub previous_interval_days: u32,
    pub interval_days: u32,
    pub repetitions: u32,
    pub ease_factor: f64,
    pub due_at: DateTime<Utc>,
    pub label: String,
}

/// "Next review" hint for one rating button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntervalPreview {
    pub rating: Rating,
    pub interval_days: u32,
    pub label: String,
}

impl Flashcard {
    /// A card entering review for the first time.
    #[must_use]
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            interval_days: default_interval(),
            repetitions: 0,
            ease_factor: DEFAULT_EASE,
            due_at: None,
        }
    }

    /// Word on the front, translation on the back.
    #[must_use]
    pub fn from_vocabulary(item: &VocabularyItem) -> Self {
        Self::new(item.word.clone(), item.translation.clone())
    }

    /// Replace the ease factor.
    ///
    /// # Errors
    ///
    /// Returns `SrsError::InvalidEase` if `ease` is not finite or is below
    /// [`MIN_EASE`](crate::MIN_EASE).
    pub fn with_ease(mut self, ease: f64) -> Result<Self, SrsError> {
        self.ease_factor = checked_ease(ease)?;
        Ok(self)
    }

    /// A card with no due date has never been scheduled and is always due.
    #[must_use]
    pub fn is_due_at(&self, now: DateTime<Utc>) -> bool {
        self.due_at.is_none_or(|due| due <= now)
    }

    /// Interval the card would get for `rating`, without changing it.
    #[must_use]
    pub fn interval_for(&self, rating: Rating) -> u32 {
        next_interval(self.interval_days, self.ease_factor, rating)
    }

    /// Next-interval hints for all four ratings, in button order.
    #[must_use]
    pub fn preview(&self) -> [IntervalPreview; 4] {
        Rating::ALL.map(|rating| {
            let interval_days = self.interval_for(rating);
            IntervalPreview {
                rating,
                interval_days,
                label: interval_label(interval_days),
            }
        })
    }

    /// Apply a rating: update the interval and repetition count and schedule
    /// the next review relative to `reviewed_at`. The ease factor is left
    /// unchanged.
    pub fn review(&mut self, rating: Rating, reviewed_at: DateTime<Utc>) -> ReviewOutcome {
        let previous_interval_days = self.interval_days;
        let interval_days = self.interval_for(rating);

        self.interval_days = interval_days;
        self.repetitions = if rating.is_pass() {
            self.repetitions.saturating_add(1)
        } else {
            0
        };
        let due_at = reviewed_at
            .checked_add_signed(TimeDelta::days(i64::from(interval_days)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.due_at = Some(due_at);

        ReviewOutcome {
            rating,
            previous_interval_days,
            interval_days,
            repetitions: self.repetitions,
            ease_factor: self.ease_factor,
            due_at,
            label: interval_label(interval_days),
        }
    }
}
