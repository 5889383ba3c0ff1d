//! Axum route handler for feedback submissions.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::models::{FeedbackSubmission, StoredFeedback};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

/// POST /api/feedback
///
/// Path kept from the original backend so existing clients keep working.
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Json(submission): Json<FeedbackSubmission>,
) -> Result<Json<FeedbackResponse>, AppError> {
    submission.validate()?;

    let record = StoredFeedback::new(submission);
    let total = state.feedback.append(&record).await?;

    info!(
        feedback_id = %record.id,
        rating = record.submission.user_feedback.rating,
        total,
        "Saved feedback to {}",
        state.feedback.path().display()
    );

    Ok(Json(FeedbackResponse {
        success: true,
        message: "Feedback saved successfully!".to_string(),
        id: record.id,
    }))
}
