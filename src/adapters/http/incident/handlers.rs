//! HTTP handlers for incident walkthrough endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};

use crate::application::{
    GetIncidentProgressHandler, GetIncidentProgressQuery, GetIncidentScriptHandler,
    RunIncidentPlaybackCommand, RunIncidentPlaybackHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::incident::{IncidentProgress, IncidentScript};
use crate::ports::Clock;

use super::dto::{IncidentScriptResponse, ProgressParams, StreamParams};
use crate::adapters::http::error::ApiError;

/// Shared state for incident endpoints.
#[derive(Clone)]
pub struct IncidentAppState {
    pub script: Arc<IncidentScript>,
    pub clock: Arc<dyn Clock>,
}

impl IncidentAppState {
    pub fn new(script: Arc<IncidentScript>, clock: Arc<dyn Clock>) -> Self {
        Self { script, clock }
    }

    pub fn script_handler(&self) -> GetIncidentScriptHandler {
        GetIncidentScriptHandler::new(self.script.clone())
    }

    pub fn progress_handler(&self) -> GetIncidentProgressHandler {
        GetIncidentProgressHandler::new(self.script.clone())
    }

    pub fn playback_handler(&self) -> RunIncidentPlaybackHandler {
        RunIncidentPlaybackHandler::new(self.script.clone(), self.clock.clone())
    }
}

/// GET /api/incident/script
pub async fn get_script(State(state): State<IncidentAppState>) -> Json<IncidentScriptResponse> {
    Json(state.script_handler().handle().into())
}

/// GET /api/incident/progress?elapsed_secs=
pub async fn get_progress(
    State(state): State<IncidentAppState>,
    query: Result<Query<ProgressParams>, QueryRejection>,
) -> Result<Json<IncidentProgress>, ApiError> {
    let Query(params) = query?;
    let elapsed = Duration::try_from_secs_f64(params.elapsed_secs).map_err(|_| {
        ApiError::bad_request(
            ErrorCode::OutOfRange,
            "elapsed_secs must be a non-negative number of seconds",
        )
    })?;

    let progress = state
        .progress_handler()
        .handle(GetIncidentProgressQuery { elapsed });
    Ok(Json(progress))
}

/// GET /api/incident/stream
///
/// Server-sent events, one `step` event per completed step; the stream
/// ends after the last step.
pub async fn stream_playback(
    State(state): State<IncidentAppState>,
    query: Result<Query<StreamParams>, QueryRejection>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let Query(params) = query?;
    let mut cmd = RunIncidentPlaybackCommand::default();
    if let Some(poll_ms) = params.poll_ms {
        cmd.poll_interval = Duration::from_millis(poll_ms);
    }

    let steps = state.playback_handler().handle(cmd);
    let events = ReceiverStream::new(steps).map(|step| Event::default().event("step").json_data(step));

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}
