//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::matcher::match_careers;
use crate::assessment::models::{
    AptitudeQuestion, AptitudeScores, CareerMatch, CareerProfile, InterestQuestion,
    InterestScores,
};
use crate::assessment::question_bank::{APTITUDE_QUESTIONS, INTEREST_QUESTIONS};
use crate::assessment::scoring::{score_aptitude, score_interest};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub aptitude: &'static [AptitudeQuestion],
    pub interest: &'static [InterestQuestion],
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub aptitude_answers: Vec<Option<usize>>,
    pub interest_ratings: Vec<Option<u8>>,
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub aptitude_scores: AptitudeScores,
    pub interest_scores: InterestScores,
    pub matches: Vec<CareerMatch>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub aptitude_scores: AptitudeScores,
    pub interest_scores: InterestScores,
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<CareerMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessment/questions
///
/// Both question lists in submission order. Correct answers are withheld.
pub async fn handle_get_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        aptitude: APTITUDE_QUESTIONS,
        interest: INTEREST_QUESTIONS,
    })
}

/// POST /api/v1/assessment/score
///
/// Scores a completed quiz and ranks the catalog against the result.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let aptitude_scores = score_aptitude(APTITUDE_QUESTIONS, &request.aptitude_answers)?;
    let interest_scores = score_interest(INTEREST_QUESTIONS, &request.interest_ratings)?;

    let k = request.k.unwrap_or(state.config.match_top_k);
    let matches = match_careers(
        &aptitude_scores,
        &interest_scores,
        state.catalog.profiles(),
        k,
    )?;

    info!(
        top_match = matches.first().map(|m| m.profile.career.as_str()),
        "assessment scored"
    );

    Ok(Json(ScoreResponse {
        aptitude_scores,
        interest_scores,
        matches,
    }))
}

/// GET /api/v1/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<CareerProfile>> {
    Json(state.catalog.profiles().to_vec())
}

/// POST /api/v1/careers/match
///
/// Ranks the catalog against scores the client already holds.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    request.aptitude_scores.validate()?;
    request.interest_scores.validate()?;

    let k = request.k.unwrap_or(state.config.match_top_k);
    let matches = match_careers(
        &request.aptitude_scores,
        &request.interest_scores,
        state.catalog.profiles(),
        k,
    )?;

    Ok(Json(MatchResponse { matches }))
}
