//! Password reset endpoints.
//!
//! All three calls validate their input locally first; a rejected input is
//! reported as [`ApiError::InvalidInput`] without touching the network.

use lexis_core::responses::{MessageResponse, TokenValidation};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;

const REQUEST_PATH: &str = "/api/v1/auth/password-reset/request";
const VALIDATE_PATH: &str = "/api/v1/auth/password-reset/validate-token";
const CONFIRM_PATH: &str = "/api/v1/auth/password-reset/confirm";

/// Shortest password the backend accepts.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Serialize)]
struct ResetRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetConfirm<'a> {
    token: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    /// Ask the backend to email a reset link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for a malformed email, otherwise any
    /// transport, status or decode error after retries.
    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let email = validate_email(email)?;
        self.post_json("password_reset.request", REQUEST_PATH, &ResetRequest { email })
            .await
    }

    /// Check whether a reset token is still usable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for an empty token, otherwise any
    /// transport, status or decode error after retries.
    pub async fn validate_reset_token(&self, token: &str) -> Result<TokenValidation, ApiError> {
        let token = validate_token(token)?;
        let path = format!("{VALIDATE_PATH}/{}", urlencoding::encode(token));
        self.get_json("password_reset.validate", &path).await
    }

    /// Set a new password using a reset token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for an empty token or a weak
    /// password, otherwise any transport, status or decode error after retries.
    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let token = validate_token(token)?;
        validate_new_password(new_password)?;
        self.post_json(
            "password_reset.confirm",
            CONFIRM_PATH,
            &ResetConfirm {
                token,
                new_password,
            },
        )
        .await
    }
}

/// Loose address check: one `@`, a non-empty local part, a dotted domain,
/// no whitespace. Returns the trimmed address.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] describing the problem.
pub fn validate_email(email: &str) -> Result<&str, ApiError> {
    let email = email.trim();
    let invalid = || ApiError::InvalidInput(format!("'{email}' is not a valid email address"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let dotted: Vec<&str> = domain.split('.').collect();
    if dotted.len() < 2 || dotted.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(email)
}

/// # Errors
///
/// Returns [`ApiError::InvalidInput`] if the token is blank.
pub fn validate_token(token: &str) -> Result<&str, ApiError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ApiError::InvalidInput("reset token is empty".into()));
    }
    Ok(token)
}

/// At least [`MIN_PASSWORD_LEN`] characters with at least one letter and one
/// digit.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] naming the first unmet rule.
pub fn validate_new_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if !password.chars().any(char::is_alphabetic) {
        return Err(ApiError::InvalidInput("password must contain a letter".into()));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ApiError::InvalidInput("password must contain a digit".into()));
    }
    Ok(())
}
