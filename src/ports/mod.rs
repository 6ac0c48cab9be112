//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionnaireSource` - Ordered assessment rows (sheet export, fixture)
//! - `SessionLogStore` - Tracker logs addressable by session id
//! - `Clock` - Current time for incident pacing

mod clock;
mod questionnaire_source;
mod session_log_store;

pub use clock::Clock;
pub use questionnaire_source::{QuestionnaireSource, QuestionnaireSourceError};
pub use session_log_store::{LogMutation, SessionLogStore};
