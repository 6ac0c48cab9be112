//! Manually entered KPI readings and savings records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EntryId, Timestamp, ValidationError};

/// One KPI reading, e.g. "Store uptime" = 99.95 "%".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiEntry {
    pub id: EntryId,
    pub metric: String,
    pub value: f64,
    pub unit: Option<String>,
    pub recorded_at: Timestamp,
}

impl KpiEntry {
    pub fn new(
        metric: impl Into<String>,
        value: f64,
        unit: Option<String>,
        recorded_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let metric = required("metric", metric.into())?;
        if !value.is_finite() {
            return Err(ValidationError::not_finite("value"));
        }
        Ok(Self {
            id: EntryId::new(),
            metric,
            value,
            unit: unit.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()),
            recorded_at,
        })
    }
}

/// Realized savings attributed to an initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEntry {
    pub id: EntryId,
    pub initiative: String,
    pub category: String,
    pub amount: f64,
    pub recorded_at: Timestamp,
}

impl SavingsEntry {
    /// Category assigned when none is given.
    pub const UNCATEGORIZED: &'static str = "Uncategorized";

    pub fn new(
        initiative: impl Into<String>,
        category: Option<String>,
        amount: f64,
        recorded_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let initiative = required("initiative", initiative.into())?;
        if !amount.is_finite() {
            return Err(ValidationError::not_finite("amount"));
        }
        if amount < 0.0 {
            return Err(ValidationError::invalid_format(
                "amount",
                "savings cannot be negative",
            ));
        }
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| Self::UNCATEGORIZED.to_string());
        Ok(Self {
            id: EntryId::new(),
            initiative,
            category,
            amount,
            recorded_at,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_trims_metric_and_drops_blank_unit() {
        let entry = KpiEntry::new("  MTTR ", 42.0, Some(" ".to_string()), Timestamp::now()).unwrap();
        assert_eq!(entry.metric, "MTTR");
        assert_eq!(entry.unit, None);
    }

    #[test]
    fn kpi_rejects_blank_metric() {
        let err = KpiEntry::new("", 1.0, None, Timestamp::now()).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("metric"));
    }

    #[test]
    fn kpi_rejects_nan() {
        let err = KpiEntry::new("Uptime", f64::NAN, None, Timestamp::now()).unwrap_err();
        assert_eq!(err, ValidationError::not_finite("value"));
    }

    #[test]
    fn savings_defaults_category() {
        let entry = SavingsEntry::new("WAN consolidation", None, 1200.0, Timestamp::now()).unwrap();
        assert_eq!(entry.category, SavingsEntry::UNCATEGORIZED);
    }

    #[test]
    fn savings_rejects_negative_amount() {
        let result = SavingsEntry::new("Licensing", None, -1.0, Timestamp::now());
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }
}
