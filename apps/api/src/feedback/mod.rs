//! Feedback Sink: durable record of how students rated AI recommendations.

pub mod handlers;
pub mod models;
pub mod store;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Invalid feedback: {0}")]
    Invalid(String),

    #[error("Feedback store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feedback serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Feedback store {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Could not replace feedback store: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Feedback writer task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
