//! RecordKpiHandler - Command handler for appending a KPI reading.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::tracker::{KpiEntry, SessionLog, TrackerError, TrackerSummary};
use crate::ports::{Clock, SessionLogStore};

/// Command to record one KPI reading.
#[derive(Debug, Clone)]
pub struct RecordKpiCommand {
    pub session_id: SessionId,
    pub metric: String,
    pub value: f64,
    pub unit: Option<String>,
}

/// Result of recording a KPI.
#[derive(Debug, Clone)]
pub struct RecordKpiResult {
    /// The entry as stored.
    pub entry: KpiEntry,
    /// Session summary including the new entry.
    pub summary: TrackerSummary,
}

/// Handler for recording KPI readings.
pub struct RecordKpiHandler {
    store: Arc<dyn SessionLogStore>,
    clock: Arc<dyn Clock>,
}

impl RecordKpiHandler {
    pub fn new(store: Arc<dyn SessionLogStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, cmd: RecordKpiCommand) -> Result<RecordKpiResult, TrackerError> {
        let RecordKpiCommand {
            session_id,
            metric,
            value,
            unit,
        } = cmd;

        let recorded_at = self.clock.now();
        let log = self
            .store
            .update(
                session_id,
                Box::new(move |log: &mut SessionLog| -> Result<(), TrackerError> {
                    log.record_kpi(metric, value, unit, recorded_at)?;
                    Ok(())
                }),
            )
            .await?;

        let entry = log
            .kpis()
            .last()
            .cloned()
            .ok_or_else(|| TrackerError::Storage("KPI entry was not persisted".to_string()))?;
        tracing::debug!(%session_id, metric = %entry.metric, value = entry.value, "KPI recorded");

        Ok(RecordKpiResult {
            entry,
            summary: log.summary(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionLogStore, ManualClock};
    use crate::domain::foundation::Timestamp;
    use std::time::Duration;

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Timestamp::now()))
    }

    async fn store_with_log() -> (Arc<InMemorySessionLogStore>, SessionId) {
        let store = Arc::new(InMemorySessionLogStore::new());
        let log = SessionLog::new();
        let id = log.id();
        store.insert(log).await.unwrap();
        (store, id)
    }

    fn command(session_id: SessionId, metric: &str, value: f64) -> RecordKpiCommand {
        RecordKpiCommand {
            session_id,
            metric: metric.to_string(),
            value,
            unit: Some("%".to_string()),
        }
    }

    #[tokio::test]
    async fn test_records_kpi_and_returns_summary() {
        let (store, id) = store_with_log().await;
        let handler = RecordKpiHandler::new(store.clone(), clock());

        handler.handle(command(id, "Uptime", 99.0)).await.unwrap();
        let result = handler.handle(command(id, "Uptime", 100.0)).await.unwrap();

        assert_eq!(result.entry.value, 100.0);
        assert_eq!(result.summary.kpi_count, 2);
        assert_eq!(result.summary.metrics[0].mean, 99.5);
        assert_eq!(store.get(id).await.unwrap().kpis().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = Arc::new(InMemorySessionLogStore::new());
        let handler = RecordKpiHandler::new(store, clock());
        let id = SessionId::new();

        let err = handler.handle(command(id, "Uptime", 99.0)).await.unwrap_err();

        assert_eq!(err, TrackerError::NotFound(id));
    }

    #[tokio::test]
    async fn test_invalid_entry_is_not_stored() {
        let (store, id) = store_with_log().await;
        let handler = RecordKpiHandler::new(store.clone(), clock());

        let err = handler.handle(command(id, "  ", 1.0)).await.unwrap_err();

        assert!(matches!(err, TrackerError::InvalidEntry(_)));
        assert!(store.get(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_entry_is_stamped_by_the_clock() {
        let (store, id) = store_with_log().await;
        let clock = clock();
        clock.advance(Duration::from_secs(300));
        let handler = RecordKpiHandler::new(store, clock.clone());

        let result = handler.handle(command(id, "MTTR", 38.0)).await.unwrap();

        assert_eq!(result.entry.recorded_at, clock.now());
    }
}
