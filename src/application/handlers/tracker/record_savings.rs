//! RecordSavingsHandler - Command handler for appending a savings record.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::tracker::{SavingsEntry, SessionLog, TrackerError, TrackerSummary};
use crate::ports::{Clock, SessionLogStore};

/// Command to record realized savings.
#[derive(Debug, Clone)]
pub struct RecordSavingsCommand {
    pub session_id: SessionId,
    pub initiative: String,
    /// Defaults to "Uncategorized" when absent or blank.
    pub category: Option<String>,
    pub amount: f64,
}

/// Result of recording savings.
#[derive(Debug, Clone)]
pub struct RecordSavingsResult {
    pub entry: SavingsEntry,
    pub summary: TrackerSummary,
}

/// Handler for recording savings.
pub struct RecordSavingsHandler {
    store: Arc<dyn SessionLogStore>,
    clock: Arc<dyn Clock>,
}

impl RecordSavingsHandler {
    pub fn new(store: Arc<dyn SessionLogStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        cmd: RecordSavingsCommand,
    ) -> Result<RecordSavingsResult, TrackerError> {
        let RecordSavingsCommand {
            session_id,
            initiative,
            category,
            amount,
        } = cmd;

        let recorded_at = self.clock.now();
        let log = self
            .store
            .update(
                session_id,
                Box::new(move |log: &mut SessionLog| -> Result<(), TrackerError> {
                    log.record_savings(initiative, category, amount, recorded_at)?;
                    Ok(())
                }),
            )
            .await?;

        let entry = log
            .savings()
            .last()
            .cloned()
            .ok_or_else(|| TrackerError::Storage("Savings entry was not persisted".to_string()))?;
        tracing::debug!(
            %session_id,
            category = %entry.category,
            amount = entry.amount,
            "Savings recorded"
        );

        Ok(RecordSavingsResult {
            entry,
            summary: log.summary(),
        })
    }
}
