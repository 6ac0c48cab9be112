//! In-Memory Session Log Store Adapter
//!
//! Keeps tracker session logs in memory for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::tracker::{SessionLog, TrackerError};
use crate::ports::{LogMutation, SessionLogStore};

/// In-memory storage for session logs
#[derive(Debug, Clone)]
pub struct InMemorySessionLogStore {
    logs: Arc<RwLock<HashMap<SessionId, SessionLog>>>,
}

impl InMemorySessionLogStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            logs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored logs
    pub async fn log_count(&self) -> usize {
        self.logs.read().await.len()
    }
}

impl Default for InMemorySessionLogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionLogStore for InMemorySessionLogStore {
    async fn insert(&self, log: SessionLog) -> Result<(), TrackerError> {
        let mut logs = self.logs.write().await;
        logs.insert(log.id(), log);
        Ok(())
    }

    async fn get(&self, id: SessionId) -> Result<SessionLog, TrackerError> {
        let logs = self.logs.read().await;
        logs.get(&id).cloned().ok_or(TrackerError::NotFound(id))
    }

    async fn update(
        &self,
        id: SessionId,
        mutate: LogMutation,
    ) -> Result<SessionLog, TrackerError> {
        let mut logs = self.logs.write().await;
        let log = logs.get_mut(&id).ok_or(TrackerError::NotFound(id))?;

        // Mutate a copy so a failed update leaves the stored log untouched
        let mut updated = log.clone();
        mutate(&mut updated)?;
        *log = updated.clone();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemorySessionLogStore::new();
        let log = SessionLog::new();
        let id = log.id();

        store.insert(log).await.unwrap();

        let loaded = store.get(id).await.unwrap();
        assert_eq!(loaded.id(), id);
        assert_eq!(store.log_count().await, 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent_log() {
        let store = InMemorySessionLogStore::new();
        let id = SessionId::new();

        let result = store.get(id).await;

        assert_eq!(result.unwrap_err(), TrackerError::NotFound(id));
    }

    #[tokio::test]
    async fn test_update_appends_entry() {
        let store = InMemorySessionLogStore::new();
        let log = SessionLog::new();
        let id = log.id();
        store.insert(log).await.unwrap();

        let updated = store
            .update(
                id,
                Box::new(|log: &mut SessionLog| -> Result<(), TrackerError> {
                    log.record_kpi("Uptime", 99.9, None, Timestamp::now())?;
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.kpis().len(), 1);
        assert_eq!(store.get(id).await.unwrap().kpis().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_log_unchanged() {
        let store = InMemorySessionLogStore::new();
        let log = SessionLog::new();
        let id = log.id();
        store.insert(log).await.unwrap();

        let result = store
            .update(
                id,
                Box::new(|log: &mut SessionLog| -> Result<(), TrackerError> {
                    log.record_kpi("Uptime", 99.9, None, Timestamp::now())?;
                    log.record_kpi("", 1.0, None, Timestamp::now())?;
                    Ok(())
                }),
            )
            .await;

        assert!(matches!(result, Err(TrackerError::InvalidEntry(_))));
        assert!(store.get(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_nonexistent_log() {
        let store = InMemorySessionLogStore::new();
        let result = store.update(SessionId::new(), Box::new(|_: &mut SessionLog| Ok(()))).await;
        assert!(matches!(result, Err(TrackerError::NotFound(_))));
    }

}
