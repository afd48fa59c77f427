//! Lesson generation.

use lexis_core::responses::{LessonRequest, LessonResponse};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ApiError;

const GENERATE_PATH: &str = "/api/v1/lessons/generate";

impl ApiClient {
    /// Generate a lesson and validate every task before returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for a zero task count or blank
    /// language, [`ApiError::InvalidResponse`] when the decoded lesson breaks
    /// a task constraint, otherwise any transport, status or decode error.
    pub async fn generate_lesson(&self, request: &LessonRequest) -> Result<LessonResponse, ApiError> {
        if request.language.trim().is_empty() {
            return Err(ApiError::InvalidInput("language is empty".into()));
        }
        if request.task_count == 0 {
            return Err(ApiError::InvalidInput(
                "task_count must be at least 1".into(),
            ));
        }
        let lesson: LessonResponse = self
            .post_json("lessons.generate", GENERATE_PATH, request)
            .await?;
        lesson.validate()?;
        debug!(
            title = %lesson.meta.title,
            tasks = lesson.tasks.len(),
            "lesson generated"
        );
        Ok(lesson)
    }
}
