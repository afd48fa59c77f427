//! # lexis-api
//!
//! HTTP client for the Lexis backend.
//!
//! Covers the password reset flow (request, validate token, confirm), lesson
//! generation and persona chat. Each endpoint is a method on [`ApiClient`];
//! every request runs through a bounded [`RetryPolicy`] that retries transport
//! failures and 5xx responses with exponential backoff and gives up
//! immediately on 4xx.
//!
//! ```no_run
//! # async fn demo() -> Result<(), lexis_api::ApiError> {
//! use lexis_api::ApiClient;
//! use lexis_config::LexisConfig;
//!
//! let config = LexisConfig::load()?;
//! let client = ApiClient::from_config(&config)?;
//! let ack = client.request_password_reset("scribe@example.com").await?;
//! println!("{}", ack.message);
//! # Ok(())
//! # }
//! ```

mod chat;
mod client;
mod error;
mod http;
mod lessons;
pub mod password_reset;
pub mod retry;

pub use client::ApiClient;
pub use error::ApiError;
pub use retry::{RetryPolicy, with_retry};
