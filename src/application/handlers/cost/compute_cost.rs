//! ComputeCostHandler - Query handler for the program cost simulator.

use std::sync::Arc;

use crate::config::PricingConfig;
use crate::domain::cost_model::{CostBreakdown, CostModel, CostModelError, DiscountTier};

/// Query to price a rollout.
///
/// Omitted fields fall back to the configured pricing defaults.
#[derive(Debug, Clone, Default)]
pub struct ComputeCostQuery {
    pub store_count: Option<i64>,
    pub discount: Option<DiscountTier>,
}

/// Result of a cost computation.
pub type ComputeCostResult = CostBreakdown;

/// Handler for computing program cost breakdowns.
pub struct ComputeCostHandler {
    model: Arc<CostModel>,
    defaults: PricingConfig,
}

impl ComputeCostHandler {
    pub fn new(model: Arc<CostModel>, defaults: PricingConfig) -> Self {
        Self { model, defaults }
    }

    pub fn handle(&self, query: ComputeCostQuery) -> Result<ComputeCostResult, CostModelError> {
        let store_count = query
            .store_count
            .unwrap_or(self.defaults.default_store_count);
        let discount = query.discount.unwrap_or(self.defaults.default_discount);

        let breakdown = self.model.compute_cost(store_count, discount)?;
        tracing::debug!(
            store_count,
            discount = %discount,
            total = breakdown.total,
            "Computed program cost"
        );
        Ok(breakdown)
    }
}
