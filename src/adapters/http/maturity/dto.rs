//! DTOs for maturity scorecard endpoints.

use serde::Deserialize;

use crate::domain::maturity::{QuestionRow, QuestionnaireMode};

/// Body for `POST /api/maturity/assess`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessRequest {
    /// Rows in sheet order.
    #[serde(default)]
    pub rows: Vec<QuestionRow>,
    /// Reject malformed rows instead of normalizing them.
    #[serde(default)]
    pub strict: bool,
}

impl AssessRequest {
    pub fn mode(&self) -> QuestionnaireMode {
        if self.strict {
            QuestionnaireMode::Strict
        } else {
            QuestionnaireMode::Permissive
        }
    }
}
