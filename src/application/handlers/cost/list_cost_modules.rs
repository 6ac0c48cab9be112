//! ListCostModulesHandler - Query handler for the price list.

use std::sync::Arc;

use crate::domain::cost_model::{CostModel, CostModule, DiscountTier};

/// Price list and the discount tiers that apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModuleList {
    pub modules: Vec<CostModule>,
    pub unit_cost_per_store: f64,
    pub discount_tiers: Vec<DiscountTier>,
}

/// Handler for reading the module table.
pub struct ListCostModulesHandler {
    model: Arc<CostModel>,
}

impl ListCostModulesHandler {
    pub fn new(model: Arc<CostModel>) -> Self {
        Self { model }
    }

    pub fn handle(&self) -> CostModuleList {
        let table = self.model.table();
        CostModuleList {
            modules: table.iter().cloned().collect(),
            unit_cost_per_store: table.unit_cost_per_store(),
            discount_tiers: DiscountTier::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_standard_table_in_order() {
        let handler = ListCostModulesHandler::new(Arc::new(CostModel::standard()));

        let list = handler.handle();

        assert_eq!(list.modules.len(), 6);
        assert_eq!(list.modules[0].name, "Network Modernization");
        assert_eq!(list.unit_cost_per_store, 60_800.0);
        assert_eq!(list.discount_tiers.len(), 4);
    }
}
