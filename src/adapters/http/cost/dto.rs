//! DTOs for cost simulator endpoints.

use serde::{Deserialize, Serialize};

use crate::application::CostModuleList;
use crate::domain::cost_model::{CostBreakdown, CostModule, DiscountTier, ModuleCost};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for `GET /api/cost`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostQueryParams {
    pub stores: Option<i64>,
    /// Selector label (`30%`), tier name (`tier30`) or rate (`0.3`).
    pub discount: Option<String>,
}

/// Body for `POST /api/cost`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostRequest {
    pub store_count: Option<i64>,
    pub discount: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Discount tier as shown in the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountTierView {
    pub tier: DiscountTier,
    pub label: String,
    pub rate: f64,
}

impl From<DiscountTier> for DiscountTierView {
    fn from(tier: DiscountTier) -> Self {
        Self {
            tier,
            label: tier.label().to_string(),
            rate: tier.rate(),
        }
    }
}

/// Cost breakdown response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdownResponse {
    pub store_count: u64,
    pub discount: DiscountTierView,
    pub lines: Vec<ModuleCostView>,
    pub list_total: f64,
    pub savings: f64,
    pub total: f64,
}

/// One module line of a breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCostView {
    pub module: String,
    pub unit_cost: f64,
    pub list_total: f64,
    pub discounted_total: f64,
}

impl From<ModuleCost> for ModuleCostView {
    fn from(line: ModuleCost) -> Self {
        Self {
            module: line.module,
            unit_cost: line.unit_cost,
            list_total: line.list_total,
            discounted_total: line.discounted_total,
        }
    }
}

impl From<CostBreakdown> for CostBreakdownResponse {
    fn from(breakdown: CostBreakdown) -> Self {
        let list_total = breakdown.list_total();
        let savings = breakdown.savings();
        Self {
            store_count: breakdown.store_count,
            discount: breakdown.discount.into(),
            lines: breakdown.lines.into_iter().map(Into::into).collect(),
            list_total,
            savings,
            total: breakdown.total,
        }
    }
}

/// Price list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostModulesResponse {
    pub modules: Vec<CostModule>,
    pub unit_cost_per_store: f64,
    pub discount_tiers: Vec<DiscountTierView>,
}

impl From<CostModuleList> for CostModulesResponse {
    fn from(list: CostModuleList) -> Self {
        Self {
            modules: list.modules,
            unit_cost_per_store: list.unit_cost_per_store,
            discount_tiers: list.discount_tiers.into_iter().map(Into::into).collect(),
        }
    }
}
