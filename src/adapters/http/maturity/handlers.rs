//! HTTP handlers for maturity scorecard endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::application::{AssessMaturityCommand, AssessMaturityHandler, GetScorecardHandler};
use crate::domain::maturity::{MaturityAssessment, MaturityScorer, QuestionnaireMode};
use crate::ports::QuestionnaireSource;

use super::dto::AssessRequest;
use crate::adapters::http::error::ApiError;

/// Shared state for maturity endpoints.
#[derive(Clone)]
pub struct MaturityAppState {
    pub scorer: MaturityScorer,
    /// Source behind the standing scorecard; `None` disables it.
    pub source: Option<Arc<dyn QuestionnaireSource>>,
    /// Parsing mode for the standing scorecard.
    pub source_mode: QuestionnaireMode,
}

impl MaturityAppState {
    pub fn new(
        scorer: MaturityScorer,
        source: Option<Arc<dyn QuestionnaireSource>>,
        source_mode: QuestionnaireMode,
    ) -> Self {
        Self {
            scorer,
            source,
            source_mode,
        }
    }

    pub fn assess_handler(&self) -> AssessMaturityHandler {
        AssessMaturityHandler::new(self.scorer.clone())
    }

    pub fn scorecard_handler(&self) -> GetScorecardHandler {
        GetScorecardHandler::new(self.scorer.clone(), self.source.clone(), self.source_mode)
    }
}

/// POST /api/maturity/assess
pub async fn assess(
    State(state): State<MaturityAppState>,
    body: Result<Json<AssessRequest>, JsonRejection>,
) -> Result<Json<MaturityAssessment>, ApiError> {
    let Json(request) = body?;
    let mode = request.mode();
    let cmd = AssessMaturityCommand {
        rows: request.rows,
        mode,
    };
    let assessment = state.assess_handler().handle(cmd)?;
    Ok(Json(assessment))
}

/// GET /api/maturity/scorecard
pub async fn get_scorecard(
    State(state): State<MaturityAppState>,
) -> Result<Json<MaturityAssessment>, ApiError> {
    let assessment = state.scorecard_handler().handle().await?;
    Ok(Json(assessment))
}
