//! Axum route handlers for the Advisor API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::advisor::models::{
    ChatContext, ChatMessage, ChatRole, RefinedAnalysis, RoadmapEntry, ScoreProfile,
};
use crate::advisor::CareerAdvisor;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(flatten)]
    pub profile: ScoreProfile,
    #[serde(default)]
    pub user_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub context: ChatContext,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    #[serde(flatten)]
    pub profile: ScoreProfile,
    #[serde(default)]
    pub user_answers: Vec<String>,
    pub career_field: String,
}

#[derive(Debug, Serialize)]
pub struct FollowUpResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub recommendations: Vec<RoadmapEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

fn advisor(state: &AppState) -> Result<Arc<dyn CareerAdvisor>, AppError> {
    state.advisor.clone().ok_or(AppError::AdvisorUnavailable)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/advisor/questions
pub async fn handle_follow_up_questions(
    State(state): State<AppState>,
    Json(profile): Json<ScoreProfile>,
) -> Result<Json<FollowUpResponse>, AppError> {
    let advisor = advisor(&state)?;
    profile.validate()?;

    let questions = advisor.follow_up_questions(&profile).await?;
    Ok(Json(FollowUpResponse { questions }))
}

/// POST /api/v1/advisor/roadmap
///
/// Personalized career paths built from scores plus the follow-up answers.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let advisor = advisor(&state)?;
    request.profile.validate()?;

    let recommendations = advisor
        .career_roadmap(&request.profile, &request.user_answers)
        .await?;
    Ok(Json(RoadmapResponse { recommendations }))
}

/// POST /api/v1/advisor/chat
///
/// Stateless: the client sends the whole transcript on every turn.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let advisor = advisor(&state)?;
    request.context.profile.validate()?;

    match request.history.last() {
        Some(last) if last.role == ChatRole::User && !last.text.trim().is_empty() => {}
        _ => {
            return Err(AppError::Validation(
                "history must end with a non-empty user message".to_string(),
            ))
        }
    }

    let reply = advisor
        .chat_reply(&request.context, &request.history)
        .await?;
    Ok(Json(ChatResponse { reply }))
}

/// POST /api/v1/advisor/analysis
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<RefinedAnalysis>, AppError> {
    let advisor = advisor(&state)?;
    request.profile.validate()?;

    let career_field = request.career_field.trim();
    if career_field.is_empty() {
        return Err(AppError::Validation(
            "career_field cannot be empty".to_string(),
        ));
    }

    let analysis = advisor
        .refined_analysis(&request.profile, &request.user_answers, career_field)
        .await?;
    Ok(Json(analysis))
}
