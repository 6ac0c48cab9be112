//! Assessment taxonomy: security functions, capability stages and responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessment category a questionnaire item is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SecurityFunction {
    Identify,
    Protect,
    Detect,
    Respond,
    Recover,
    #[serde(rename = "CIS")]
    Cis,
}

impl SecurityFunction {
    /// All functions in partition order.
    pub const ALL: [SecurityFunction; 6] = [
        SecurityFunction::Identify,
        SecurityFunction::Protect,
        SecurityFunction::Detect,
        SecurityFunction::Respond,
        SecurityFunction::Recover,
        SecurityFunction::Cis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SecurityFunction::Identify => "Identify",
            SecurityFunction::Protect => "Protect",
            SecurityFunction::Detect => "Detect",
            SecurityFunction::Respond => "Respond",
            SecurityFunction::Recover => "Recover",
            SecurityFunction::Cis => "CIS",
        }
    }
}

impl fmt::Display for SecurityFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered maturity level, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CapabilityStage {
    Survival,
    Measured,
    Improving,
    #[serde(rename = "High Availability")]
    HighAvailability,
    Optimized,
}

impl CapabilityStage {
    /// All stages in rank order. Also the tie-break order for the dominant stage.
    pub const ALL: [CapabilityStage; 5] = [
        CapabilityStage::Survival,
        CapabilityStage::Measured,
        CapabilityStage::Improving,
        CapabilityStage::HighAvailability,
        CapabilityStage::Optimized,
    ];

    /// Rank weight, 1 (Survival) through 5 (Optimized).
    pub fn weight(&self) -> u8 {
        match self {
            CapabilityStage::Survival => 1,
            CapabilityStage::Measured => 2,
            CapabilityStage::Improving => 3,
            CapabilityStage::HighAvailability => 4,
            CapabilityStage::Optimized => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CapabilityStage::Survival => "Survival",
            CapabilityStage::Measured => "Measured",
            CapabilityStage::Improving => "Improving",
            CapabilityStage::HighAvailability => "High Availability",
            CapabilityStage::Optimized => "Optimized",
        }
    }
}

impl fmt::Display for CapabilityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Normalized questionnaire answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Response {
    Yes,
    No,
}

impl Response {
    pub const ALL: [Response; 2] = [Response::Yes, Response::No];

    /// Permissive normalization: only text equal to "YES" ignoring case is a yes.
    ///
    /// Surrounding whitespace is not stripped, so `" yes"` is a no.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(text) if text.to_uppercase() == "YES" => Response::Yes,
            _ => Response::No,
        }
    }

    /// Strict parse: `Some` only for yes/no ignoring case.
    pub fn parse_strict(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "YES" => Some(Response::Yes),
            "NO" => Some(Response::No),
            _ => None,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Response::Yes)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Response::Yes => "YES",
            Response::No => "NO",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
