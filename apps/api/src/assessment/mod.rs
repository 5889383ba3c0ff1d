// Assessment core: question bank, career catalog, scoring engine, matcher.
// Everything below `handlers` is pure and synchronous; handlers only adapt it to HTTP.

pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod question_bank;
pub mod scoring;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("{section} answers: expected {expected} entries, got {actual}")]
    LengthMismatch {
        section: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("question {question_id}: option {selected} does not exist ({options} options)")]
    OptionOutOfRange {
        question_id: u32,
        selected: usize,
        options: usize,
    },

    #[error("question {question_id}: rating {rating} is outside the 1–5 scale")]
    InvalidRating { question_id: u32, rating: u8 },

    #[error("{dimension} score {value} is outside 0.0 – 1.0")]
    ScoreOutOfRange { dimension: &'static str, value: f64 },

    #[error("profile vectors differ in length ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },

    #[error("career catalog is empty")]
    EmptyCatalog,

    #[error("invalid career catalog: {0}")]
    InvalidCatalog(String),
}

impl AssessmentError {
    /// True when the error stems from caller-supplied input rather than server data.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AssessmentError::LengthMismatch { .. }
                | AssessmentError::OptionOutOfRange { .. }
                | AssessmentError::InvalidRating { .. }
                | AssessmentError::ScoreOutOfRange { .. }
        )
    }
}
