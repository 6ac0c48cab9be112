//! Maturity Scorer - Weighted capability scoring over a yes/no questionnaire.

use serde::Serialize;
use std::sync::Arc;

use super::{
    CapabilityStage, PositionalClassifier, QuestionRow, QuestionnaireError, QuestionnaireItem,
    Response, SecurityFunction, TaxonomyClassifier, PLACEHOLDER_QUESTION,
};

/// Number of responses for one (function, stage, response) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageResponseCount {
    pub function: SecurityFunction,
    pub stage: CapabilityStage,
    pub response: Response,
    pub count: usize,
}

/// Average score for one security function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionScore {
    pub function: SecurityFunction,
    pub item_count: usize,
    pub yes_count: usize,
    /// `None` when the function has no items.
    pub mean_score: Option<f64>,
}

/// YES responses per capability stage across all functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageTally {
    pub stage: CapabilityStage,
    pub item_count: usize,
    pub yes_count: usize,
}

/// Aggregate view of a scored questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturitySummary {
    pub total_items: usize,
    pub yes_count: usize,
    /// Every function x stage x response combination, zero-filled.
    pub grouped_counts: Vec<StageResponseCount>,
    pub function_scores: Vec<FunctionScore>,
    pub stage_tallies: Vec<StageTally>,
    /// Stage with the most YES responses; `None` if nobody answered YES.
    pub dominant_stage: Option<CapabilityStage>,
    pub overall_mean_score: Option<f64>,
}

impl MaturitySummary {
    /// Count for a single combination.
    pub fn count(
        &self,
        function: SecurityFunction,
        stage: CapabilityStage,
        response: Response,
    ) -> usize {
        self.grouped_counts
            .iter()
            .find(|c| c.function == function && c.stage == stage && c.response == response)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn function_score(&self, function: SecurityFunction) -> Option<&FunctionScore> {
        self.function_scores.iter().find(|s| s.function == function)
    }

    /// Mean score for a function, `None` if it has no items.
    pub fn mean_score(&self, function: SecurityFunction) -> Option<f64> {
        self.function_score(function).and_then(|s| s.mean_score)
    }
}

/// Questionnaire with its summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturityAssessment {
    pub items: Vec<QuestionnaireItem>,
    pub summary: MaturitySummary,
}

/// How tolerant questionnaire ingestion is of malformed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionnaireMode {
    /// Missing questions get a placeholder; unknown responses become NO.
    #[default]
    Permissive,
    /// Missing questions and non yes/no responses are errors.
    Strict,
}

/// Builds scored questionnaires and summarizes them.
#[derive(Clone)]
pub struct MaturityScorer {
    classifier: Arc<dyn TaxonomyClassifier>,
    placeholder: String,
}

impl MaturityScorer {
    /// Scorer with positional classification and the default placeholder.
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(PositionalClassifier),
            placeholder: PLACEHOLDER_QUESTION.to_string(),
        }
    }

    /// Replaces the taxonomy classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn TaxonomyClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replaces the text used for rows without a question.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Normalizes, classifies and scores each row, preserving order.
    ///
    /// # Edge Cases
    /// - Empty input: returns an empty questionnaire
    /// - Missing or blank question: replaced by the placeholder
    /// - Missing or unrecognized response: treated as NO
    pub fn build_questionnaire(&self, rows: &[QuestionRow]) -> Vec<QuestionnaireItem> {
        let total = rows.len();
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let question = row.question_text().unwrap_or(self.placeholder.as_str());
                let response = Response::normalize(row.response.as_deref());
                self.item(index, total, question, response)
            })
            .collect()
    }

    /// Like [`build_questionnaire`](Self::build_questionnaire) but rejects malformed rows.
    ///
    /// # Errors
    /// - `EmptyQuestion` for a missing or blank question
    /// - `InvalidResponse` for a response other than yes/no (any case)
    pub fn build_questionnaire_strict(
        &self,
        rows: &[QuestionRow],
    ) -> Result<Vec<QuestionnaireItem>, QuestionnaireError> {
        let total = rows.len();
        rows.iter()
            .enumerate()
            .map(|(index, row)| -> Result<QuestionnaireItem, QuestionnaireError> {
                let question = row
                    .question_text()
                    .ok_or(QuestionnaireError::EmptyQuestion { index })?;
                let raw = row.response.as_deref().unwrap_or_default();
                let response =
                    Response::parse_strict(raw).ok_or_else(|| QuestionnaireError::InvalidResponse {
                        index,
                        value: raw.to_string(),
                    })?;
                Ok(self.item(index, total, question, response))
            })
            .collect()
    }

    fn item(
        &self,
        index: usize,
        total: usize,
        question: &str,
        response: Response,
    ) -> QuestionnaireItem {
        let taxonomy = self.classifier.classify(index, total, question);
        QuestionnaireItem::new(index, question, response, taxonomy.function, taxonomy.stage)
    }

    /// Computes grouped counts, per-function means and the dominant stage.
    ///
    /// # Algorithm
    /// - Grouped counts cover every (function, stage, response), absent ones as 0
    /// - Function mean = average item score; `None` for a function without items
    /// - Dominant stage = most YES responses; ties go to the lower-ranked stage
    pub fn summarize(items: &[QuestionnaireItem]) -> MaturitySummary {
        let mut grouped_counts = Vec::with_capacity(
            SecurityFunction::ALL.len() * CapabilityStage::ALL.len() * Response::ALL.len(),
        );
        for function in SecurityFunction::ALL {
            for stage in CapabilityStage::ALL {
                for response in Response::ALL {
                    let count = items
                        .iter()
                        .filter(|i| {
                            i.function == function
                                && i.capability_stage == stage
                                && i.response == response
                        })
                        .count();
                    grouped_counts.push(StageResponseCount {
                        function,
                        stage,
                        response,
                        count,
                    });
                }
            }
        }

        let function_scores = SecurityFunction::ALL
            .into_iter()
            .map(|function| {
                let members: Vec<&QuestionnaireItem> =
                    items.iter().filter(|i| i.function == function).collect();
                FunctionScore {
                    function,
                    item_count: members.len(),
                    yes_count: members.iter().filter(|i| i.response.is_yes()).count(),
                    mean_score: mean(members.iter().map(|i| i.score)),
                }
            })
            .collect();

        let stage_tallies: Vec<StageTally> = CapabilityStage::ALL
            .into_iter()
            .map(|stage| {
                let members = items.iter().filter(|i| i.capability_stage == stage);
                StageTally {
                    stage,
                    item_count: members.clone().count(),
                    yes_count: members.filter(|i| i.response.is_yes()).count(),
                }
            })
            .collect();

        let mut dominant: Option<&StageTally> = None;
        for tally in stage_tallies.iter().filter(|t| t.yes_count > 0) {
            if dominant.map_or(true, |best| tally.yes_count > best.yes_count) {
                dominant = Some(tally);
            }
        }
        let dominant_stage = dominant.map(|t| t.stage);

        MaturitySummary {
            total_items: items.len(),
            yes_count: items.iter().filter(|i| i.response.is_yes()).count(),
            grouped_counts,
            function_scores,
            stage_tallies,
            dominant_stage,
            overall_mean_score: mean(items.iter().map(|i| i.score)),
        }
    }

    /// Builds the questionnaire in the given mode and summarizes it.
    pub fn assess(
        &self,
        rows: &[QuestionRow],
        mode: QuestionnaireMode,
    ) -> Result<MaturityAssessment, QuestionnaireError> {
        let items = match mode {
            QuestionnaireMode::Permissive => self.build_questionnaire(rows),
            QuestionnaireMode::Strict => self.build_questionnaire_strict(rows)?,
        };
        let summary = Self::summarize(&items);
        Ok(MaturityAssessment { items, summary })
    }
}

impl Default for MaturityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MaturityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaturityScorer")
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

fn mean(scores: impl Iterator<Item = u8>) -> Option<f64> {
    let (sum, count) = scores.fold((0u64, 0usize), |(sum, count), s| {
        (sum + u64::from(s), count + 1)
    });
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
