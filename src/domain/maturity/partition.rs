//! Taxonomy assignment for questionnaire items.
//!
//! The built-in [`PositionalClassifier`] labels items purely by row position:
//! the ordered list is cut into contiguous blocks of `total / k` items, one
//! block per label, and the last label absorbs any remainder. Question text is
//! ignored. Implement [`TaxonomyClassifier`] to plug in a content-aware scheme.

use super::{CapabilityStage, SecurityFunction};

/// Index of the block that position `index` falls into.
///
/// With `block = total / k`, labels `0..k-1` own exactly `block` consecutive
/// positions and label `k-1` owns the rest. When `block == 0` every position
/// maps to the last label. `k` must be non-zero.
pub fn block_index(index: usize, total: usize, k: usize) -> usize {
    debug_assert!(k > 0, "partition needs at least one label");
    let last = k.saturating_sub(1);
    let block = total / k.max(1);
    if block == 0 {
        return last;
    }
    (index / block).min(last)
}

/// Number of positions each of the `k` labels receives for `total` items.
pub fn block_sizes(total: usize, k: usize) -> Vec<usize> {
    let mut sizes = vec![0; k];
    for index in 0..total {
        sizes[block_index(index, total, k)] += 1;
    }
    sizes
}

/// Function and capability stage assigned to one questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taxonomy {
    pub function: SecurityFunction,
    pub stage: CapabilityStage,
}

/// Assigns a taxonomy to each questionnaire item.
pub trait TaxonomyClassifier: Send + Sync {
    /// Classifies the item at `index` of `total`, given its question text.
    fn classify(&self, index: usize, total: usize, question: &str) -> Taxonomy;
}

/// Assigns function and stage by contiguous position blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalClassifier;

impl TaxonomyClassifier for PositionalClassifier {
    fn classify(&self, index: usize, total: usize, _question: &str) -> Taxonomy {
        let functions = SecurityFunction::ALL;
        let stages = CapabilityStage::ALL;
        Taxonomy {
            function: functions[block_index(index, total, functions.len())],
            stage: stages[block_index(index, total, stages.len())],
        }
    }
}
