//! HTTP routes for maturity scorecard endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{assess, get_scorecard, MaturityAppState};

/// Creates the maturity router.
pub fn maturity_router() -> Router<MaturityAppState> {
    Router::new()
        // POST /api/maturity/assess
        .route("/api/maturity/assess", post(assess))
        // GET /api/maturity/scorecard
        .route("/api/maturity/scorecard", get(get_scorecard))
}
