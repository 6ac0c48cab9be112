//! Cost modules and the ordered price table they live in.

use serde::{Deserialize, Serialize};

use super::CostModelError;
use crate::domain::foundation::ValidationError;

/// A program workstream with a list price per store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCostModule")]
pub struct CostModule {
    pub name: String,
    pub unit_cost: f64,
}

/// Unchecked wire shape; deserialized modules go through [`CostModule::new`].
#[derive(Deserialize)]
struct RawCostModule {
    name: String,
    unit_cost: f64,
}

impl TryFrom<RawCostModule> for CostModule {
    type Error = ValidationError;

    fn try_from(raw: RawCostModule) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.unit_cost)
    }
}

impl CostModule {
    /// Creates a cost module, validating name and unit cost.
    pub fn new(name: impl Into<String>, unit_cost: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !unit_cost.is_finite() {
            return Err(ValidationError::not_finite("unit_cost"));
        }
        if unit_cost <= 0.0 {
            return Err(ValidationError::invalid_format(
                "unit_cost",
                format!("must be positive, got {}", unit_cost),
            ));
        }
        Ok(Self { name, unit_cost })
    }
}

/// Ordered, immutable set of cost modules.
///
/// Iteration order is insertion order and drives breakdown ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModuleTable {
    modules: Vec<CostModule>,
}

impl ModuleTable {
    /// Builds a table, rejecting duplicate module names.
    pub fn new(modules: Vec<CostModule>) -> Result<Self, CostModelError> {
        for (i, module) in modules.iter().enumerate() {
            if modules[..i].iter().any(|m| m.name == module.name) {
                return Err(CostModelError::DuplicateModule(module.name.clone()));
            }
        }
        Ok(Self { modules })
    }

    /// Standard list prices per store for the modernization program.
    pub fn standard() -> Self {
        let modules = [
            ("Network Modernization", 7000.0),
            ("Edge Compute + 5G", 45000.0),
            ("Security & Zero Trust", 3800.0),
            ("AIOps & Observability", 3000.0),
            ("Cloud Integration", 1000.0),
            ("Dev Enablement", 1000.0),
        ]
        .into_iter()
        .map(|(name, unit_cost)| CostModule {
            name: name.to_string(),
            unit_cost,
        })
        .collect();

        Self { modules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CostModule> {
        self.modules.iter()
    }

    pub fn get(&self, name: &str) -> Option<&CostModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Sum of unit costs, i.e. list price of one fully equipped store.
    pub fn unit_cost_per_store(&self) -> f64 {
        self.modules.iter().map(|m| m.unit_cost).sum()
    }
}

impl Default for ModuleTable {
    fn default() -> Self {
        Self::standard()
    }
}
