//! Session log - caller-owned record of KPI and savings entries.

use serde::{Deserialize, Serialize};

use super::{KpiEntry, SavingsEntry};
use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

/// Readings for one KPI metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: String,
    pub unit: Option<String>,
    pub count: usize,
    pub latest: f64,
    pub mean: f64,
}

/// Savings grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub count: usize,
    pub total: f64,
}

/// Aggregates over a session log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerSummary {
    pub kpi_count: usize,
    /// One entry per metric, in order of first appearance.
    pub metrics: Vec<MetricSummary>,
    pub savings_count: usize,
    pub total_savings: f64,
    /// One entry per category, in order of first appearance.
    pub savings_by_category: Vec<CategoryTotal>,
}

/// KPI and savings entries recorded during one working session.
///
/// Entries are only ever appended; reads return them in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    id: SessionId,
    created_at: Timestamp,
    kpis: Vec<KpiEntry>,
    savings: Vec<SavingsEntry>,
}

impl SessionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::created_at(Timestamp::now())
    }

    /// Creates an empty log stamped with `created_at`.
    pub fn created_at(created_at: Timestamp) -> Self {
        Self {
            id: SessionId::new(),
            created_at,
            kpis: Vec::new(),
            savings: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn created(&self) -> Timestamp {
        self.created_at
    }

    pub fn kpis(&self) -> &[KpiEntry] {
        &self.kpis
    }

    pub fn savings(&self) -> &[SavingsEntry] {
        &self.savings
    }

    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty() && self.savings.is_empty()
    }

    /// Validates and appends a KPI reading.
    pub fn record_kpi(
        &mut self,
        metric: impl Into<String>,
        value: f64,
        unit: Option<String>,
        recorded_at: Timestamp,
    ) -> Result<&KpiEntry, ValidationError> {
        let entry = KpiEntry::new(metric, value, unit, recorded_at)?;
        self.kpis.push(entry);
        Ok(&self.kpis[self.kpis.len() - 1])
    }

    /// Validates and appends a savings record.
    pub fn record_savings(
        &mut self,
        initiative: impl Into<String>,
        category: Option<String>,
        amount: f64,
        recorded_at: Timestamp,
    ) -> Result<&SavingsEntry, ValidationError> {
        let entry = SavingsEntry::new(initiative, category, amount, recorded_at)?;
        self.savings.push(entry);
        Ok(&self.savings[self.savings.len() - 1])
    }

    /// Aggregates the log.
    pub fn summary(&self) -> TrackerSummary {
        let mut metrics: Vec<MetricSummary> = Vec::new();
        let mut sums: Vec<f64> = Vec::new();
        for entry in &self.kpis {
            match metrics.iter().position(|m| m.metric == entry.metric) {
                Some(pos) => {
                    let summary = &mut metrics[pos];
                    summary.count += 1;
                    summary.latest = entry.value;
                    if entry.unit.is_some() {
                        summary.unit = entry.unit.clone();
                    }
                    sums[pos] += entry.value;
                }
                None => {
                    metrics.push(MetricSummary {
                        metric: entry.metric.clone(),
                        unit: entry.unit.clone(),
                        count: 1,
                        latest: entry.value,
                        mean: entry.value,
                    });
                    sums.push(entry.value);
                }
            }
        }
        for (summary, sum) in metrics.iter_mut().zip(&sums) {
            summary.mean = sum / summary.count as f64;
        }

        let mut savings_by_category: Vec<CategoryTotal> = Vec::new();
        for entry in &self.savings {
            match savings_by_category
                .iter_mut()
                .find(|c| c.category == entry.category)
            {
                Some(total) => {
                    total.count += 1;
                    total.total += entry.amount;
                }
                None => savings_by_category.push(CategoryTotal {
                    category: entry.category.clone(),
                    count: 1,
                    total: entry.amount,
                }),
            }
        }

        TrackerSummary {
            kpi_count: self.kpis.len(),
            metrics,
            savings_count: self.savings.len(),
            total_savings: self.savings.iter().map(|s| s.amount).sum(),
            savings_by_category,
        }
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = SessionLog::new();
        assert!(log.is_empty());
        let summary = log.summary();
        assert_eq!(summary.kpi_count, 0);
        assert_eq!(summary.total_savings, 0.0);
        assert!(summary.metrics.is_empty());
    }

    #[test]
    fn entries_are_read_in_insertion_order() {
        let mut log = SessionLog::new();
        log.record_kpi("Uptime", 99.1, Some("%".to_string()), Timestamp::now()).unwrap();
        log.record_kpi("MTTR", 45.0, Some("min".to_string()), Timestamp::now()).unwrap();
        log.record_kpi("Uptime", 99.5, None, Timestamp::now()).unwrap();

        let metrics: Vec<&str> = log.kpis().iter().map(|k| k.metric.as_str()).collect();
        assert_eq!(metrics, vec!["Uptime", "MTTR", "Uptime"]);
    }

    #[test]
    fn summary_tracks_latest_and_mean_per_metric() {
        let mut log = SessionLog::new();
        log.record_kpi("Uptime", 99.0, Some("%".to_string()), Timestamp::now()).unwrap();
        log.record_kpi("MTTR", 40.0, None, Timestamp::now()).unwrap();
        log.record_kpi("Uptime", 98.0, None, Timestamp::now()).unwrap();

        let summary = log.summary();
        assert_eq!(summary.kpi_count, 3);
        assert_eq!(summary.metrics.len(), 2);
        let uptime = &summary.metrics[0];
        assert_eq!(uptime.metric, "Uptime");
        assert_eq!(uptime.count, 2);
        assert_eq!(uptime.latest, 98.0);
        assert_eq!(uptime.mean, 98.5);
        assert_eq!(uptime.unit.as_deref(), Some("%"));
        assert_eq!(summary.metrics[1].metric, "MTTR");
    }

    #[test]
    fn summary_totals_savings_by_category() {
        let mut log = SessionLog::new();
        let at = Timestamp::now();
        log.record_savings("SD-WAN cutover", Some("Network".to_string()), 1500.0, at)
            .unwrap();
        log.record_savings("Ticket deflection", Some("Operations".to_string()), 250.0, at)
            .unwrap();
        log.record_savings("MPLS exit", Some("Network".to_string()), 500.0, at)
            .unwrap();
        log.record_savings("Misc", None, 50.0, at).unwrap();

        let summary = log.summary();
        assert_eq!(summary.savings_count, 4);
        assert_eq!(summary.total_savings, 2300.0);
        let categories: Vec<(&str, f64)> = summary
            .savings_by_category
            .iter()
            .map(|c| (c.category.as_str(), c.total))
            .collect();
        assert_eq!(
            categories,
            vec![("Network", 2000.0), ("Operations", 250.0), ("Uncategorized", 50.0)]
        );
    }

    #[test]
    fn invalid_entry_is_not_appended() {
        let mut log = SessionLog::new();
        assert!(log.record_kpi(" ", 1.0, None, Timestamp::now()).is_err());
        assert!(log.record_savings("Refund", None, -10.0, Timestamp::now()).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn entries_carry_the_given_timestamp() {
        let mut log = SessionLog::created_at(Timestamp::now());
        let at = log.created().plus(std::time::Duration::from_secs(90));

        log.record_kpi("Uptime", 99.9, None, at).unwrap();
        log.record_savings("MPLS exit", None, 500.0, at).unwrap();

        assert_eq!(log.kpis()[0].recorded_at, at);
        assert_eq!(log.savings()[0].recorded_at, at);
    }

    #[test]
    fn record_returns_appended_entry() {
        let mut log = SessionLog::new();
        let id = log.record_kpi("Stores live", 120.0, None, Timestamp::now()).unwrap().id;
        assert_eq!(log.kpis()[0].id, id);
    }
}
