//! Cost Model - Program cost simulation per store rollout.
//!
//! Stateless: a [`CostModel`] wraps an immutable [`ModuleTable`] and every
//! call to [`CostModel::compute_cost`] returns a fresh [`CostBreakdown`].

mod calculator;
mod discount;
mod errors;
mod module_table;

pub use calculator::{CostBreakdown, CostModel, ModuleCost};
pub use discount::DiscountTier;
pub use errors::CostModelError;
pub use module_table::{CostModule, ModuleTable};
