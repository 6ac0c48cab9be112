//! DTOs for tracker endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::tracker::{KpiEntry, SavingsEntry, SessionLog, TrackerSummary};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for `POST /api/tracker/sessions/:id/kpis`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordKpiRequest {
    pub metric: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Body for `POST /api/tracker/sessions/:id/savings`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSavingsRequest {
    pub initiative: String,
    #[serde(default)]
    pub category: Option<String>,
    pub amount: f64,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Full session log with aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct SessionLogResponse {
    pub id: SessionId,
    pub created_at: Timestamp,
    pub kpis: Vec<KpiEntry>,
    pub savings: Vec<SavingsEntry>,
    pub summary: TrackerSummary,
}

impl SessionLogResponse {
    pub fn new(log: SessionLog, summary: TrackerSummary) -> Self {
        Self {
            id: log.id(),
            created_at: log.created(),
            kpis: log.kpis().to_vec(),
            savings: log.savings().to_vec(),
            summary,
        }
    }
}

impl From<SessionLog> for SessionLogResponse {
    fn from(log: SessionLog) -> Self {
        let summary = log.summary();
        Self::new(log, summary)
    }
}

/// A newly recorded entry with the updated summary.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedEntryResponse<E> {
    pub entry: E,
    pub summary: TrackerSummary,
}
