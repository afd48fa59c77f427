//! Persona chat.

use lexis_core::responses::{ChatRequest, ChatResponse};

use crate::client::ApiClient;
use crate::error::ApiError;

const CHAT_PATH: &str = "/api/v1/chat";

impl ApiClient {
    /// Send one learner message to a persona, with prior turns as context.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for a blank message or persona,
    /// otherwise any transport, status or decode error.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        if request.persona_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("persona is empty".into()));
        }
        if request.message.trim().is_empty() {
            return Err(ApiError::InvalidInput("message is empty".into()));
        }
        self.post_json("chat.send", CHAT_PATH, request).await
    }
}
