//! Questionnaire validation errors (strict mode only).

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("Row {index}: question text is missing")]
    EmptyQuestion { index: usize },

    #[error("Row {index}: response '{value}' is not YES or NO")]
    InvalidResponse { index: usize, value: String },
}

impl QuestionnaireError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ValidationFailed
    }

    /// Zero-based row the error refers to.
    pub fn index(&self) -> usize {
        match self {
            QuestionnaireError::EmptyQuestion { index }
            | QuestionnaireError::InvalidResponse { index, .. } => *index,
        }
    }
}
