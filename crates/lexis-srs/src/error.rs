use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SrsError {
    #[error("unknown rating '{0}' (expected again, hard, good, easy or 1-4)")]
    UnknownRating(String),

    #[error("invalid ease factor {0}: must be a finite number >= 1.0")]
    InvalidEase(f64),
}
