//! CreateSessionLogHandler - Command handler for opening a tracker session.

use std::sync::Arc;

use crate::domain::tracker::{SessionLog, TrackerError};
use crate::ports::{Clock, SessionLogStore};

/// Handler for creating empty session logs.
pub struct CreateSessionLogHandler {
    store: Arc<dyn SessionLogStore>,
    clock: Arc<dyn Clock>,
}

impl CreateSessionLogHandler {
    pub fn new(store: Arc<dyn SessionLogStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self) -> Result<SessionLog, TrackerError> {
        let log = SessionLog::created_at(self.clock.now());
        self.store.insert(log.clone()).await?;
        tracing::info!(session_id = %log.id(), "Tracker session opened");
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionLogStore, ManualClock};
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn test_creates_and_stores_empty_log() {
        let store = Arc::new(InMemorySessionLogStore::new());
        let start = Timestamp::now();
        let handler =
            CreateSessionLogHandler::new(store.clone(), Arc::new(ManualClock::new(start)));

        let log = handler.handle().await.unwrap();

        assert!(log.is_empty());
        assert_eq!(log.created(), start);
        assert_eq!(store.get(log.id()).await.unwrap(), log);
    }

    #[tokio::test]
    async fn test_each_session_gets_its_own_id() {
        let store = Arc::new(InMemorySessionLogStore::new());
        let handler =
            CreateSessionLogHandler::new(store.clone(), Arc::new(ManualClock::new(Timestamp::now())));

        let first = handler.handle().await.unwrap();
        let second = handler.handle().await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(store.log_count().await, 2);
    }
}
