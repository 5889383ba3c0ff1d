use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::assessment::models::{AptitudeScores, InterestScores};
use crate::assessment::question_bank::{MAX_RATING, MIN_RATING};
use crate::feedback::FeedbackError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub aptitude_scores: AptitudeScores,
    pub interest_scores: InterestScores,
    #[serde(default)]
    pub user_answers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFeedback {
    /// Star rating, 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub suggested_better_fit: String,
}

/// What the results screen posts when a student rates a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub user_profile: UserProfile,
    /// The roadmap entry being rated, stored exactly as the client sent it.
    pub ai_recommendation: Value,
    pub user_feedback: UserFeedback,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl FeedbackSubmission {
    pub fn validate(&self) -> Result<(), FeedbackError> {
        let rating = self.user_feedback.rating;
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FeedbackError::Invalid(format!(
                "rating {rating} is outside {MIN_RATING}..={MAX_RATING}"
            )));
        }

        if !self.ai_recommendation.is_object() {
            return Err(FeedbackError::Invalid(
                "ai_recommendation must be a JSON object".to_string(),
            ));
        }

        self.user_profile
            .aptitude_scores
            .validate()
            .and_then(|_| self.user_profile.interest_scores.validate())
            .map_err(|e| FeedbackError::Invalid(e.to_string()))
    }
}

/// One element of the store's JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFeedback {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub submission: FeedbackSubmission,
}

impl StoredFeedback {
    pub fn new(submission: FeedbackSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            submission,
        }
    }
}
