//! Tracker Module - KPI and savings logs for one working session.
//!
//! A [`SessionLog`] is an explicit value owned by whoever created it; the
//! application layer keeps logs behind the `SessionLogStore` port.

mod entries;
mod errors;
mod session_log;

pub use entries::{KpiEntry, SavingsEntry};
pub use errors::TrackerError;
pub use session_log::{CategoryTotal, MetricSummary, SessionLog, TrackerSummary};
