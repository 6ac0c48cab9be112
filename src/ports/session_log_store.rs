//! Session log store port - holds tracker logs for the lifetime of a session.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::tracker::{SessionLog, TrackerError};

/// Edit applied to a stored log inside [`SessionLogStore::update`].
///
/// Must stay outside the `#[async_trait]` item: the borrow has to be
/// higher-ranked, not bound to the method lifetime.
pub type LogMutation =
    Box<dyn for<'a> FnOnce(&'a mut SessionLog) -> Result<(), TrackerError> + Send>;

/// Keeps session logs addressable by id.
///
/// Implementations are not required to outlive the process.
#[async_trait]
pub trait SessionLogStore: Send + Sync {
    /// Stores a freshly created log.
    async fn insert(&self, log: SessionLog) -> Result<(), TrackerError>;

    /// Returns a snapshot of the log.
    async fn get(&self, id: SessionId) -> Result<SessionLog, TrackerError>;

    /// Applies `mutate` to the stored log atomically and returns its result.
    async fn update(
        &self,
        id: SessionId,
        mutate: LogMutation,
    ) -> Result<SessionLog, TrackerError>;
}
