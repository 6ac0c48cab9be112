//! Cost simulator query handlers.

mod compute_cost;
mod list_cost_modules;

pub use compute_cost::{ComputeCostHandler, ComputeCostQuery, ComputeCostResult};
pub use list_cost_modules::{CostModuleList, ListCostModulesHandler};
