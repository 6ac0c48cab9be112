//! Clock port - source of the current time.

use crate::domain::foundation::Timestamp;

/// Supplies "now" to anything that paces itself on wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
