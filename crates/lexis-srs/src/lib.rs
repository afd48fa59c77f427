//! # lexis-srs
//!
//! Simplified spaced-repetition intervals for Lexis flashcards.
//!
//! The calculator only answers "when should this card come back?" for each of
//! the four ratings. It never adjusts the ease factor and keeps no schedule of
//! its own; callers persist [`Flashcard`] wherever they keep review state.
//!
//! ```
//! use lexis_srs::{Flashcard, Rating, next_interval};
//!
//! assert_eq!(next_interval(10, 2.5, Rating::Good), 25);
//! assert_eq!(next_interval(10, 2.5, Rating::Again), 1);
//!
//! let card = Flashcard::new("aqua", "water");
//! let hints = card.preview();
//! assert_eq!(hints[0].rating, Rating::Again);
//! ```

mod card;
mod error;
mod interval;
mod rating;

pub use card::{Flashcard, IntervalPreview, ReviewOutcome};
pub use error::SrsError;
pub use interval::{
    DEFAULT_EASE, EASY_BONUS, HARD_MULTIPLIER, MIN_EASE, checked_ease, interval_label,
    next_interval,
};
pub use rating::Rating;
