//! Cost Model - Program cost breakdown from store count and discount tier.

use serde::Serialize;

use super::{CostModelError, DiscountTier, ModuleTable};

/// Cost of one module across the whole rollout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleCost {
    pub module: String,
    pub unit_cost: f64,
    /// Undiscounted cost: unit cost times store count.
    pub list_total: f64,
    pub discounted_total: f64,
}

/// Result of one cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub store_count: u64,
    pub discount: DiscountTier,
    /// One line per module, in module table order.
    pub lines: Vec<ModuleCost>,
    pub total: f64,
}

impl CostBreakdown {
    /// Discounted cost for a named module.
    pub fn get(&self, module: &str) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.module == module)
            .map(|line| line.discounted_total)
    }

    /// Total before discount.
    pub fn list_total(&self) -> f64 {
        self.lines.iter().map(|line| line.list_total).sum()
    }

    /// Amount saved by the discount tier.
    pub fn savings(&self) -> f64 {
        self.list_total() - self.total
    }

    /// Module names in breakdown order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.module.as_str())
    }
}

/// Deterministic program-cost calculator over a fixed module table.
#[derive(Debug, Clone, Default)]
pub struct CostModel {
    table: ModuleTable,
}

impl CostModel {
    pub fn new(table: ModuleTable) -> Self {
        Self { table }
    }

    /// Cost model over the standard price list.
    pub fn standard() -> Self {
        Self::new(ModuleTable::standard())
    }

    pub fn table(&self) -> &ModuleTable {
        &self.table
    }

    /// Computes the discounted cost of every module and the grand total.
    ///
    /// # Algorithm
    /// For each module in table order:
    /// `discounted = unit_cost * store_count * (1 - rate)`, accumulated into `total`.
    ///
    /// # Errors
    /// - `InvalidStoreCount` when `store_count <= 0`. There is no upper bound.
    pub fn compute_cost(
        &self,
        store_count: i64,
        discount: DiscountTier,
    ) -> Result<CostBreakdown, CostModelError> {
        if store_count <= 0 {
            return Err(CostModelError::InvalidStoreCount(store_count));
        }
        let stores = store_count as f64;
        let keep = 1.0 - discount.rate();

        let mut lines = Vec::with_capacity(self.table.len());
        let mut total = 0.0;
        for module in self.table.iter() {
            let list_total = stores * module.unit_cost;
            let discounted_total = list_total * keep;
            total += discounted_total;
            lines.push(ModuleCost {
                module: module.name.clone(),
                unit_cost: module.unit_cost,
                list_total,
                discounted_total,
            });
        }

        Ok(CostBreakdown {
            store_count: store_count as u64,
            discount,
            lines,
            total,
        })
    }
}
