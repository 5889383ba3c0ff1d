pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::assessment::handlers as assessment;
use crate::feedback::handlers as feedback;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let feedback_limit = state.config.feedback_body_limit_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessment/questions",
            get(assessment::handle_get_questions),
        )
        .route("/api/v1/assessment/score", post(assessment::handle_score))
        .route("/api/v1/careers", get(assessment::handle_list_careers))
        .route("/api/v1/careers/match", post(assessment::handle_match))
        // Advisor API (503 when no LLM key is configured)
        .route(
            "/api/v1/advisor/questions",
            post(advisor::handle_follow_up_questions),
        )
        .route("/api/v1/advisor/roadmap", post(advisor::handle_roadmap))
        .route("/api/v1/advisor/chat", post(advisor::handle_chat))
        .route("/api/v1/advisor/analysis", post(advisor::handle_analysis))
        // Feedback sink
        .route(
            "/api/feedback",
            post(feedback::handle_submit_feedback).layer(DefaultBodyLimit::max(feedback_limit)),
        )
        .with_state(state)
}
