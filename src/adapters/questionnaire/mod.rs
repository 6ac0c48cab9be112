//! Questionnaire Source Adapters
//!
//! - **JsonFileQuestionnaireSource** - Sheet export as a JSON array on disk
//! - **InMemoryQuestionnaireSource** - Fixed rows (fixtures, tests)

mod in_memory;
mod json_file;

pub use in_memory::InMemoryQuestionnaireSource;
pub use json_file::JsonFileQuestionnaireSource;
