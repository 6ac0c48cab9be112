//! Discount tiers applied uniformly across every cost module.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CostModelError;
use crate::domain::foundation::Percentage;

/// Negotiated discount off list price.
///
/// The set is closed: the console only offers these four levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    #[default]
    None,
    Tier30,
    Tier40,
    Tier55,
}

impl DiscountTier {
    /// All tiers in ascending order.
    pub const ALL: [DiscountTier; 4] = [
        DiscountTier::None,
        DiscountTier::Tier30,
        DiscountTier::Tier40,
        DiscountTier::Tier55,
    ];

    /// Discount as a whole percentage.
    pub const fn percentage(&self) -> Percentage {
        match self {
            DiscountTier::None => Percentage::ZERO,
            DiscountTier::Tier30 => Percentage::new(30),
            DiscountTier::Tier40 => Percentage::new(40),
            DiscountTier::Tier55 => Percentage::new(55),
        }
    }

    /// Discount as a fraction in `[0, 1)`.
    pub fn rate(&self) -> f64 {
        self.percentage().as_fraction()
    }

    /// Label shown in the discount selector.
    pub fn label(&self) -> &'static str {
        match self {
            DiscountTier::None => "None",
            DiscountTier::Tier30 => "30%",
            DiscountTier::Tier40 => "40%",
            DiscountTier::Tier55 => "55%",
        }
    }

    /// Looks up the tier whose rate equals `rate`.
    pub fn from_rate(rate: f64) -> Result<Self, CostModelError> {
        Self::ALL
            .into_iter()
            .find(|tier| (tier.rate() - rate).abs() < 1e-9)
            .ok_or_else(|| CostModelError::UnknownDiscountTier(rate.to_string()))
    }
}

impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DiscountTier {
    type Err = CostModelError;

    /// Accepts selector labels (`"30%"`), tier names (`"tier30"`) and rates (`"0.3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let unknown = || CostModelError::UnknownDiscountTier(s.to_string());

        match normalized.as_str() {
            "none" => return Ok(DiscountTier::None),
            "tier30" => return Ok(DiscountTier::Tier30),
            "tier40" => return Ok(DiscountTier::Tier40),
            "tier55" => return Ok(DiscountTier::Tier55),
            _ => {}
        }

        if let Some(pct) = normalized.strip_suffix('%') {
            let pct: u8 = pct.trim().parse().map_err(|_| unknown())?;
            return Self::ALL
                .into_iter()
                .find(|tier| tier.percentage().value() == pct)
                .ok_or_else(unknown);
        }

        let rate: f64 = normalized.parse().map_err(|_| unknown())?;
        Self::from_rate(rate).map_err(|_| unknown())
    }
}

impl<'de> Deserialize<'de> for DiscountTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Label(String),
            Rate(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Label(label) => label.parse().map_err(serde::de::Error::custom),
            Raw::Rate(rate) => DiscountTier::from_rate(rate).map_err(serde::de::Error::custom),
        }
    }
}
