//! Shared API error type.
//!
//! Every failure leaves the API as `{ code, message, details? }` JSON.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ScorecardError;
use crate::domain::cost_model::CostModelError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::maturity::QuestionnaireError;
use crate::domain::tracker::TrackerError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}

/// HTTP status for an error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::InvalidArgument
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::SourceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::new(code, message))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = %self.body.code, "{}", self.body.message);
        }
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::new(status_for(err.code), err.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(ErrorCode::InvalidFormat, rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(ErrorCode::InvalidFormat, rejection.body_text())
    }
}

impl From<CostModelError> for ApiError {
    fn from(err: CostModelError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<QuestionnaireError> for ApiError {
    fn from(err: QuestionnaireError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string())
            .with_detail("index", err.index().to_string());
        let domain = match &err {
            QuestionnaireError::InvalidResponse { value, .. } => {
                domain.with_detail("value", value.clone())
            }
            QuestionnaireError::EmptyQuestion { .. } => domain,
        };
        domain.into()
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            TrackerError::NotFound(id) => DomainError::new(code, message)
                .with_detail("session_id", id.to_string())
                .into(),
            TrackerError::InvalidEntry(validation) => DomainError::from(validation).into(),
            TrackerError::Storage(_) => DomainError::new(code, message).into(),
        }
    }
}

impl From<ScorecardError> for ApiError {
    fn from(err: ScorecardError) -> Self {
        match err {
            ScorecardError::NotConfigured => {
                DomainError::new(ErrorCode::SourceUnavailable, err.to_string()).into()
            }
            ScorecardError::Source(source) => {
                let body = ErrorResponse::new(source.code(), source.to_string());
                let status = match source.code() {
                    ErrorCode::SourceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                Self::new(status, body)
            }
            // Rows come from the server's own source, not the request
            ScorecardError::Questionnaire(questionnaire) => {
                let ApiError { body, .. } = ApiError::from(questionnaire);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        }
    }
}
