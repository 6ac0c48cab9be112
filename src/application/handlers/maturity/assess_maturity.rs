//! AssessMaturityHandler - Scores a questionnaire supplied by the caller.

use crate::domain::maturity::{
    MaturityAssessment, MaturityScorer, QuestionRow, QuestionnaireError, QuestionnaireMode,
};

/// Command to score a set of questionnaire rows.
#[derive(Debug, Clone, Default)]
pub struct AssessMaturityCommand {
    /// Rows in sheet order.
    pub rows: Vec<QuestionRow>,
    pub mode: QuestionnaireMode,
}

/// Handler for scoring caller-supplied rows.
pub struct AssessMaturityHandler {
    scorer: MaturityScorer,
}

impl AssessMaturityHandler {
    pub fn new(scorer: MaturityScorer) -> Self {
        Self { scorer }
    }

    pub fn handle(
        &self,
        cmd: AssessMaturityCommand,
    ) -> Result<MaturityAssessment, QuestionnaireError> {
        let assessment = self.scorer.assess(&cmd.rows, cmd.mode).map_err(|e| {
            tracing::debug!(index = e.index(), "Questionnaire rejected: {}", e);
            e
        })?;

        tracing::debug!(
            items = assessment.summary.total_items,
            yes = assessment.summary.yes_count,
            "Scored questionnaire"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::maturity::{CapabilityStage, SecurityFunction};

    fn rows(n: usize) -> Vec<QuestionRow> {
        (0..n)
            .map(|i| QuestionRow::new(format!("Q{}", i), if i % 2 == 0 { "yes" } else { "no" }))
            .collect()
    }

    #[test]
    fn test_assess_scores_every_row() {
        let handler = AssessMaturityHandler::new(MaturityScorer::new());

        let assessment = handler
            .handle(AssessMaturityCommand {
                rows: rows(30),
                mode: QuestionnaireMode::Permissive,
            })
            .unwrap();

        assert_eq!(assessment.items.len(), 30);
        assert_eq!(assessment.summary.total_items, 30);
        assert_eq!(assessment.summary.yes_count, 15);
        assert_eq!(assessment.items[0].function, SecurityFunction::Identify);
        assert_eq!(assessment.items[0].capability_stage, CapabilityStage::Survival);
    }

    #[test]
    fn test_assess_empty_questionnaire() {
        let handler = AssessMaturityHandler::new(MaturityScorer::new());

        let assessment = handler.handle(AssessMaturityCommand::default()).unwrap();

        assert!(assessment.items.is_empty());
        assert_eq!(assessment.summary.dominant_stage, None);
        assert_eq!(assessment.summary.grouped_counts.len(), 60);
    }

    #[test]
    fn test_strict_mode_rejects_unknown_response() {
        let handler = AssessMaturityHandler::new(MaturityScorer::new());
        let mut input = rows(3);
        input[1].response = Some("maybe".to_string());

        let result = handler.handle(AssessMaturityCommand {
            rows: input,
            mode: QuestionnaireMode::Strict,
        });

        assert_eq!(
            result.unwrap_err(),
            QuestionnaireError::InvalidResponse {
                index: 1,
                value: "maybe".to_string()
            }
        );
    }
}
