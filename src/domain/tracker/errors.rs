//! Tracker error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("Session log not found: {0}")]
    NotFound(SessionId),

    #[error("Invalid entry: {0}")]
    InvalidEntry(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TrackerError::NotFound(_) => ErrorCode::SessionNotFound,
            TrackerError::InvalidEntry(_) => ErrorCode::ValidationFailed,
            TrackerError::Storage(_) => ErrorCode::InternalError,
        }
    }
}
