//! HTTP routes for cost simulator endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_cost, list_modules, post_cost, CostAppState};

/// Creates the cost router.
pub fn cost_router() -> Router<CostAppState> {
    Router::new()
        // GET/POST /api/cost
        .route("/api/cost", get(get_cost).post(post_cost))
        // GET /api/cost/modules
        .route("/api/cost/modules", get(list_modules))
}
