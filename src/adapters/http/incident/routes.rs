//! HTTP routes for incident walkthrough endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_progress, get_script, stream_playback, IncidentAppState};

/// Creates the incident router.
pub fn incident_router() -> Router<IncidentAppState> {
    Router::new()
        // GET /api/incident/script
        .route("/api/incident/script", get(get_script))
        // GET /api/incident/progress?elapsed_secs=
        .route("/api/incident/progress", get(get_progress))
        // GET /api/incident/stream (server-sent events)
        .route("/api/incident/stream", get(stream_playback))
}
