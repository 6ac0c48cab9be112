//! Property tests for the cost simulator.

use proptest::prelude::*;

use rollout_console::domain::cost_model::{CostModel, CostModelError, DiscountTier, ModuleTable};

fn any_tier() -> impl Strategy<Value = DiscountTier> {
    prop::sample::select(DiscountTier::ALL.to_vec())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1.0)
}

proptest! {
    #[test]
    fn total_is_sum_of_module_costs(stores in 1i64..5_000_000, tier in any_tier()) {
        let breakdown = CostModel::standard().compute_cost(stores, tier).unwrap();
        let sum: f64 = breakdown.lines.iter().map(|l| l.discounted_total).sum();
        prop_assert!(close(sum, breakdown.total));
    }

    #[test]
    fn total_matches_closed_form(stores in 1i64..5_000_000, tier in any_tier()) {
        let breakdown = CostModel::standard().compute_cost(stores, tier).unwrap();
        let expected = stores as f64 * ModuleTable::standard().unit_cost_per_store() * (1.0 - tier.rate());
        prop_assert!(close(breakdown.total, expected));
    }

    #[test]
    fn every_module_appears_once_in_table_order(stores in 1i64..100_000, tier in any_tier()) {
        let breakdown = CostModel::standard().compute_cost(stores, tier).unwrap();
        let names: Vec<&str> = breakdown.module_names().collect();
        let table = ModuleTable::standard();
        let expected: Vec<&str> = table.iter().map(|m| m.name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn deeper_discount_never_costs_more(stores in 1i64..1_000_000) {
        let model = CostModel::standard();
        let totals: Vec<f64> = DiscountTier::ALL
            .iter()
            .map(|tier| model.compute_cost(stores, *tier).unwrap().total)
            .collect();
        prop_assert!(totals.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn non_positive_store_counts_are_rejected(stores in i64::MIN..=0, tier in any_tier()) {
        let err = CostModel::standard().compute_cost(stores, tier).unwrap_err();
        prop_assert_eq!(err, CostModelError::InvalidStoreCount(stores));
    }
}

#[test]
fn thousand_stores_at_forty_percent_discount() {
    let breakdown = CostModel::standard()
        .compute_cost(1000, DiscountTier::Tier40)
        .unwrap();

    // 1000 stores x 60,800 per store x 0.6
    assert!(close(breakdown.total, 36_480_000.0));
    assert!(close(breakdown.get("Edge Compute + 5G").unwrap(), 27_000_000.0));
}

#[test]
fn one_store_without_discount_is_unit_cost() {
    let breakdown = CostModel::standard()
        .compute_cost(1, DiscountTier::None)
        .unwrap();

    assert_eq!(breakdown.get("Network Modernization"), Some(7000.0));
    assert_eq!(breakdown.get("Dev Enablement"), Some(1000.0));
}
