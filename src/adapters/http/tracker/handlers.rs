//! HTTP handlers for tracker endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::application::{
    CreateSessionLogHandler, GetSessionLogHandler, GetSessionLogQuery, RecordKpiCommand,
    RecordKpiHandler, RecordSavingsCommand, RecordSavingsHandler,
};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::tracker::{KpiEntry, SavingsEntry};
use crate::ports::{Clock, SessionLogStore};

use super::dto::{
    RecordKpiRequest, RecordSavingsRequest, RecordedEntryResponse, SessionLogResponse,
};
use crate::adapters::http::error::ApiError;

/// Shared state for tracker endpoints.
#[derive(Clone)]
pub struct TrackerAppState {
    pub store: Arc<dyn SessionLogStore>,
    pub clock: Arc<dyn Clock>,
}

impl TrackerAppState {
    pub fn new(store: Arc<dyn SessionLogStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn create_handler(&self) -> CreateSessionLogHandler {
        CreateSessionLogHandler::new(self.store.clone(), self.clock.clone())
    }

    pub fn get_handler(&self) -> GetSessionLogHandler {
        GetSessionLogHandler::new(self.store.clone())
    }

    pub fn record_kpi_handler(&self) -> RecordKpiHandler {
        RecordKpiHandler::new(self.store.clone(), self.clock.clone())
    }

    pub fn record_savings_handler(&self) -> RecordSavingsHandler {
        RecordSavingsHandler::new(self.store.clone(), self.clock.clone())
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(ErrorCode::InvalidFormat, "Invalid session ID format"))
}

/// POST /api/tracker/sessions
pub async fn create_session(
    State(state): State<TrackerAppState>,
) -> Result<(StatusCode, Json<SessionLogResponse>), ApiError> {
    let log = state.create_handler().handle().await?;
    Ok((StatusCode::CREATED, Json(log.into())))
}

/// GET /api/tracker/sessions/:id
pub async fn get_session(
    State(state): State<TrackerAppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionLogResponse>, ApiError> {
    let query = GetSessionLogQuery {
        session_id: parse_session_id(&session_id)?,
    };
    let result = state.get_handler().handle(query).await?;
    Ok(Json(SessionLogResponse::new(result.log, result.summary)))
}

/// POST /api/tracker/sessions/:id/kpis
pub async fn record_kpi(
    State(state): State<TrackerAppState>,
    Path(session_id): Path<String>,
    body: Result<Json<RecordKpiRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordedEntryResponse<KpiEntry>>), ApiError> {
    let Json(request) = body?;
    let cmd = RecordKpiCommand {
        session_id: parse_session_id(&session_id)?,
        metric: request.metric,
        value: request.value,
        unit: request.unit,
    };
    let result = state.record_kpi_handler().handle(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(RecordedEntryResponse {
            entry: result.entry,
            summary: result.summary,
        }),
    ))
}

/// POST /api/tracker/sessions/:id/savings
pub async fn record_savings(
    State(state): State<TrackerAppState>,
    Path(session_id): Path<String>,
    body: Result<Json<RecordSavingsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordedEntryResponse<SavingsEntry>>), ApiError> {
    let Json(request) = body?;
    let cmd = RecordSavingsCommand {
        session_id: parse_session_id(&session_id)?,
        initiative: request.initiative,
        category: request.category,
        amount: request.amount,
    };
    let result = state.record_savings_handler().handle(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(RecordedEntryResponse {
            entry: result.entry,
            summary: result.summary,
        }),
    ))
}
