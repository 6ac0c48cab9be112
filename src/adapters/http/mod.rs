//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`api_router`] mounts them all with a liveness probe.

pub mod cost;
pub mod error;
pub mod incident;
pub mod maturity;
pub mod tracker;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::adapters::{InMemorySessionLogStore, JsonFileQuestionnaireSource, SystemClock};
use crate::config::AppConfig;
use crate::domain::cost_model::CostModel;
use crate::domain::incident::IncidentScript;
use crate::domain::maturity::MaturityScorer;
use crate::ports::{Clock, QuestionnaireSource, SessionLogStore};

// Re-export key types for convenience
pub use cost::{cost_router, CostAppState};
pub use error::{ApiError, ErrorResponse};
pub use incident::{incident_router, IncidentAppState};
pub use maturity::{maturity_router, MaturityAppState};
pub use tracker::{tracker_router, TrackerAppState};

/// State for every API area.
#[derive(Clone)]
pub struct ApiState {
    pub cost: CostAppState,
    pub maturity: MaturityAppState,
    pub tracker: TrackerAppState,
    pub incident: IncidentAppState,
}

impl ApiState {
    /// Wires the standard domain services and in-process adapters from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let store: Arc<dyn SessionLogStore> = Arc::new(InMemorySessionLogStore::new());

        let source: Option<Arc<dyn QuestionnaireSource>> =
            config.scorecard.questionnaire_path.as_ref().map(|path| {
                tracing::info!("Scorecard questionnaire source: {}", path.display());
                Arc::new(JsonFileQuestionnaireSource::new(path)) as Arc<dyn QuestionnaireSource>
            });
        let scorer =
            MaturityScorer::new().with_placeholder(config.scorecard.placeholder_question.clone());

        Self {
            cost: CostAppState::new(Arc::new(CostModel::standard()), config.pricing.clone()),
            maturity: MaturityAppState::new(scorer, source, config.scorecard.mode()),
            tracker: TrackerAppState::new(store, clock.clone()),
            incident: IncidentAppState::new(Arc::new(IncidentScript::standard()), clock),
        }
    }
}

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates the full API router.
///
/// # Example
///
/// ```ignore
/// use rollout_console::adapters::http::{api_router, ApiState};
/// use rollout_console::config::AppConfig;
///
/// let app = api_router(ApiState::from_config(&AppConfig::default()));
/// ```
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(cost_router().with_state(state.cost))
        .merge(maturity_router().with_state(state.maturity))
        .merge(tracker_router().with_state(state.tracker))
        .merge(incident_router().with_state(state.incident))
}
