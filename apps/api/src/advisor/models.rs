use serde::{Deserialize, Serialize};

use crate::assessment::models::{AptitudeScores, InterestScores};
use crate::errors::AppError;

/// The two score sets every advisor call is grounded on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreProfile {
    pub aptitude_scores: AptitudeScores,
    pub interest_scores: InterestScores,
}

impl ScoreProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        self.aptitude_scores.validate()?;
        self.interest_scores.validate()?;
        Ok(())
    }
}

/// How far a roadmap role sits from where a student starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerTag {
    #[serde(rename = "Entry-level friendly")]
    EntryLevelFriendly,
    #[serde(rename = "Mid-level (aspirational)")]
    MidLevelAspirational,
    #[serde(rename = "Long-term vision role")]
    LongTermVision,
}

/// One personalized career path returned by the roadmap call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub job_title: String,
    pub career_tag: CareerTag,
    pub rationale: String,
    pub stepping_stone_roles: Vec<String>,
    pub learning_path: String,
    pub high_school_subjects: Vec<String>,
    pub potential_majors: Vec<String>,
    pub tools: Vec<String>,
    pub extracurriculars: String,
    pub extra_tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedRole {
    pub title: String,
    pub rationale: String,
}

/// Fit verdict for a career field the student asked about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinedAnalysis {
    pub is_good_fit: bool,
    pub analysis: String,
    pub suggested_roles: Vec<SuggestedRole>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Everything the counselor persona is primed with. Sent by the client on each
/// turn; the server keeps no conversation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatContext {
    #[serde(flatten)]
    pub profile: ScoreProfile,
    #[serde(default)]
    pub user_answers: Vec<String>,
    #[serde(default)]
    pub roadmap_titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_tag_uses_display_labels() {
        let tag: CareerTag = serde_json::from_str(r#""Mid-level (aspirational)""#).unwrap();
        assert_eq!(tag, CareerTag::MidLevelAspirational);
        assert_eq!(
            serde_json::to_string(&CareerTag::EntryLevelFriendly).unwrap(),
            r#""Entry-level friendly""#
        );
    }

    #[test]
    fn test_unknown_career_tag_rejected() {
        assert!(serde_json::from_str::<CareerTag>(r#""Senior""#).is_err());
    }

    #[test]
    fn test_roadmap_entry_deserializes() {
        let json = r#"{
            "job_title": "UX Researcher",
            "career_tag": "Entry-level friendly",
            "rationale": "High artistic and investigative scores.",
            "stepping_stone_roles": ["Research Assistant", "Usability Intern"],
            "learning_path": "Psychology club → usability study → internship",
            "high_school_subjects": ["Psychology", "Art"],
            "potential_majors": ["HCI", "Cognitive Science"],
            "tools": ["Figma", "Miro"],
            "extracurriculars": "Run a survey for the school newspaper.",
            "extra_tip": "Keep a portfolio of interview notes."
        }"#;
        let entry: RoadmapEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.job_title, "UX Researcher");
        assert_eq!(entry.tools.len(), 2);
    }

    #[test]
    fn test_chat_context_flattens_scores() {
        let json = r#"{
            "aptitude_scores": {"verbal": 0.5, "logical": 0.5, "spatial": 0.5, "numerical": 0.5},
            "interest_scores": {"realistic": 0.2, "investigative": 0.4, "artistic": 0.6,
                                "social": 0.8, "enterprising": 1.0, "conventional": 0.0},
            "roadmap_titles": ["Nurse"]
        }"#;
        let context: ChatContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.profile.interest_scores.enterprising, 1.0);
        assert!(context.user_answers.is_empty());
        assert_eq!(context.roadmap_titles, ["Nurse"]);
    }

    #[test]
    fn test_profile_validation_rejects_out_of_range() {
        let profile = ScoreProfile {
            aptitude_scores: AptitudeScores {
                verbal: 2.0,
                ..Default::default()
            },
            interest_scores: InterestScores::default(),
        };
        assert!(matches!(profile.validate(), Err(AppError::Validation(_))));
    }
}
