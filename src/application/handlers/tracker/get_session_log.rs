//! GetSessionLogHandler - Query handler for a tracker session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::tracker::{SessionLog, TrackerError, TrackerSummary};
use crate::ports::SessionLogStore;

/// Query for one session log.
#[derive(Debug, Clone, Copy)]
pub struct GetSessionLogQuery {
    pub session_id: SessionId,
}

/// Session log with its aggregates.
#[derive(Debug, Clone)]
pub struct GetSessionLogResult {
    pub log: SessionLog,
    pub summary: TrackerSummary,
}

/// Handler for reading a session log.
pub struct GetSessionLogHandler {
    store: Arc<dyn SessionLogStore>,
}

impl GetSessionLogHandler {
    pub fn new(store: Arc<dyn SessionLogStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetSessionLogQuery,
    ) -> Result<GetSessionLogResult, TrackerError> {
        let log = self.store.get(query.session_id).await?;
        let summary = log.summary();
        Ok(GetSessionLogResult { log, summary })
    }
}
