//! # lexis-core
//!
//! Core types and error types for Lexis.
//!
//! This crate provides the foundational types shared across all Lexis crates:
//! - Entity structs for the learning domain (challenges, achievements, badges,
//!   avatars, power-ups, vocabulary, chat, reader texts, languages)
//! - Fieldless enums with stable `snake_case` wire names
//! - The lesson task sum type with local validation and answer checking
//! - Request/response envelopes exchanged with the Lexis backend
//! - Clamped progress helpers shared by the derived computations
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lesson;
pub mod progress;
pub mod responses;

pub use errors::CoreError;
