//! Pricing defaults for the cost simulator

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::cost_model::DiscountTier;

/// Values the cost endpoint falls back to when a request omits them
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Store count used when none is supplied
    #[serde(default = "default_store_count")]
    pub default_store_count: i64,

    /// Discount tier used when none is supplied (`none`, `30%`, `tier40`, `0.55`, ...)
    #[serde(default)]
    pub default_discount: DiscountTier,
}

impl PricingConfig {
    /// Validate pricing defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_store_count <= 0 {
            return Err(ValidationError::InvalidStoreCount);
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_store_count: default_store_count(),
            default_discount: DiscountTier::None,
        }
    }
}

fn default_store_count() -> i64 {
    1000
}
