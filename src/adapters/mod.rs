//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session log stores (in-memory)
//! - `questionnaire` - Questionnaire sources (JSON file, in-memory)
//! - `clock` - System and manually driven clocks
//! - `http` - REST API over axum

pub mod clock;
pub mod http;
pub mod questionnaire;
pub mod storage;

pub use clock::{ManualClock, SystemClock};
pub use questionnaire::{InMemoryQuestionnaireSource, JsonFileQuestionnaireSource};
pub use storage::InMemorySessionLogStore;
