//! Maturity Module - Cybersecurity maturity scorecard.
//!
//! Turns ordered (question, response) rows into classified, weighted
//! questionnaire items and summarizes them per security function and
//! capability stage.
//!
//! # Components
//!
//! - `taxonomy` - Security functions, capability stages, responses
//! - `partition` - Positional block assignment and the classifier seam
//! - `questionnaire` - Raw rows and scored items
//! - `scorer` - `MaturityScorer` and `MaturitySummary`

mod errors;
mod partition;
mod questionnaire;
mod scorer;
mod taxonomy;

pub use errors::QuestionnaireError;
pub use partition::{block_index, block_sizes, PositionalClassifier, Taxonomy, TaxonomyClassifier};
pub use questionnaire::{QuestionRow, QuestionnaireItem, PLACEHOLDER_QUESTION};
pub use scorer::{
    FunctionScore, MaturityAssessment, MaturityScorer, MaturitySummary, QuestionnaireMode,
    StageResponseCount, StageTally,
};
pub use taxonomy::{CapabilityStage, Response, SecurityFunction};
