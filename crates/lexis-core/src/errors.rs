//! Error type for the Lexis data model.
//!
//! `ConfigError` and `ApiError` live in their own crates; the CLI folds
//! everything into `anyhow::Error`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A lookup by id or position found nothing.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (shape, bounds, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
