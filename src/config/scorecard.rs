//! Maturity scorecard configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::maturity::{QuestionnaireMode, PLACEHOLDER_QUESTION};

/// Where the scorecard reads its questionnaire and how strictly it parses it
#[derive(Debug, Clone, Deserialize)]
pub struct ScorecardConfig {
    /// JSON export of the assessment sheet; the scorecard endpoint is
    /// unavailable when unset
    #[serde(default)]
    pub questionnaire_path: Option<PathBuf>,

    /// Text substituted for rows with no question
    #[serde(default = "default_placeholder_question")]
    pub placeholder_question: String,

    /// Reject malformed rows instead of normalizing them
    #[serde(default)]
    pub strict: bool,
}

impl ScorecardConfig {
    pub fn mode(&self) -> QuestionnaireMode {
        if self.strict {
            QuestionnaireMode::Strict
        } else {
            QuestionnaireMode::Permissive
        }
    }

    /// Validate scorecard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.placeholder_question.trim().is_empty() {
            return Err(ValidationError::EmptyPlaceholder);
        }
        Ok(())
    }
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            questionnaire_path: None,
            placeholder_question: default_placeholder_question(),
            strict: false,
        }
    }
}

fn default_placeholder_question() -> String {
    PLACEHOLDER_QUESTION.to_string()
}
