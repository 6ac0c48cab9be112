//! Questionnaire rows as ingested and as scored.

use serde::{Deserialize, Serialize};

use super::{CapabilityStage, Response, SecurityFunction};

/// Question text used when a row has none.
pub const PLACEHOLDER_QUESTION: &str = "Untitled question";

/// One raw (question, response) pair as extracted from the assessment sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRow {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl QuestionRow {
    pub fn new(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            response: Some(response.into()),
        }
    }

    /// Question text if present and not blank.
    pub fn question_text(&self) -> Option<&str> {
        self.question
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// A normalized, classified and scored questionnaire row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireItem {
    /// Zero-based position in the questionnaire.
    pub index: usize,
    pub question: String,
    pub response: Response,
    pub function: SecurityFunction,
    pub capability_stage: CapabilityStage,
    /// 1-5, matching the capability stage rank.
    pub stage_weight: u8,
    /// `stage_weight` for a YES, otherwise 0.
    pub score: u8,
}

impl QuestionnaireItem {
    pub fn new(
        index: usize,
        question: impl Into<String>,
        response: Response,
        function: SecurityFunction,
        capability_stage: CapabilityStage,
    ) -> Self {
        let stage_weight = capability_stage.weight();
        let score = if response.is_yes() { stage_weight } else { 0 };
        Self {
            index,
            question: question.into(),
            response,
            function,
            capability_stage,
            stage_weight,
            score,
        }
    }
}
