//! HTTP handlers for cost simulator endpoints.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};

use crate::application::{ComputeCostHandler, ComputeCostQuery, ListCostModulesHandler};
use crate::config::PricingConfig;
use crate::domain::cost_model::{CostModel, DiscountTier};

use super::dto::{CostBreakdownResponse, CostModulesResponse, CostQueryParams, CostRequest};
use crate::adapters::http::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for cost endpoints.
#[derive(Clone)]
pub struct CostAppState {
    pub model: Arc<CostModel>,
    pub pricing: PricingConfig,
}

impl CostAppState {
    pub fn new(model: Arc<CostModel>, pricing: PricingConfig) -> Self {
        Self { model, pricing }
    }

    pub fn compute_cost_handler(&self) -> ComputeCostHandler {
        ComputeCostHandler::new(self.model.clone(), self.pricing.clone())
    }

    pub fn list_modules_handler(&self) -> ListCostModulesHandler {
        ListCostModulesHandler::new(self.model.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/cost?stores=&discount=
pub async fn get_cost(
    State(state): State<CostAppState>,
    query: Result<Query<CostQueryParams>, QueryRejection>,
) -> Result<Json<CostBreakdownResponse>, ApiError> {
    let Query(params) = query?;
    compute(&state, params.stores, params.discount.as_deref())
}

/// POST /api/cost
pub async fn post_cost(
    State(state): State<CostAppState>,
    body: Result<Json<CostRequest>, JsonRejection>,
) -> Result<Json<CostBreakdownResponse>, ApiError> {
    let Json(request) = body?;
    compute(&state, request.store_count, request.discount.as_deref())
}

/// GET /api/cost/modules
pub async fn list_modules(State(state): State<CostAppState>) -> Json<CostModulesResponse> {
    Json(state.list_modules_handler().handle().into())
}

fn compute(
    state: &CostAppState,
    store_count: Option<i64>,
    discount: Option<&str>,
) -> Result<Json<CostBreakdownResponse>, ApiError> {
    let discount = discount
        .filter(|label| !label.trim().is_empty())
        .map(str::parse::<DiscountTier>)
        .transpose()?;

    let query = ComputeCostQuery {
        store_count,
        discount,
    };
    let breakdown = state.compute_cost_handler().handle(query)?;

    Ok(Json(breakdown.into()))
}
