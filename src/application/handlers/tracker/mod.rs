//! Tracker command and query handlers.
//!
//! Session logs live behind the `SessionLogStore` port; handlers never hold
//! a log across requests.

mod create_session_log;
mod get_session_log;
mod record_kpi;
mod record_savings;

pub use create_session_log::CreateSessionLogHandler;
pub use get_session_log::{GetSessionLogHandler, GetSessionLogQuery, GetSessionLogResult};
pub use record_kpi::{RecordKpiCommand, RecordKpiHandler, RecordKpiResult};
pub use record_savings::{RecordSavingsCommand, RecordSavingsHandler, RecordSavingsResult};
