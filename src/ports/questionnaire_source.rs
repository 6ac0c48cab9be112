//! Questionnaire source port - supplies ordered assessment rows.

use async_trait::async_trait;

use crate::domain::foundation::ErrorCode;
use crate::domain::maturity::QuestionRow;

/// Produces the ordered (question, response) rows of an assessment.
///
/// Row order matters: taxonomy assignment is positional.
#[async_trait]
pub trait QuestionnaireSource: Send + Sync {
    /// Loads every row, in sheet order.
    async fn load_rows(&self) -> Result<Vec<QuestionRow>, QuestionnaireSourceError>;

    /// Human-readable origin for logging (e.g. a file path).
    fn describe(&self) -> String;
}

/// Errors that can occur while loading questionnaire rows.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireSourceError {
    #[error("Questionnaire not found: {0}")]
    NotFound(String),

    #[error("Questionnaire could not be parsed: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuestionnaireSourceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionnaireSourceError::NotFound(_) => ErrorCode::SourceUnavailable,
            QuestionnaireSourceError::Malformed(_) => ErrorCode::InvalidFormat,
            QuestionnaireSourceError::Io(_) => ErrorCode::SourceUnavailable,
        }
    }
}

impl From<serde_json::Error> for QuestionnaireSourceError {
    fn from(err: serde_json::Error) -> Self {
        QuestionnaireSourceError::Malformed(err.to_string())
    }
}
