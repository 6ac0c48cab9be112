//! GetScorecardHandler - Scores the questionnaire behind the configured source.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::maturity::{
    MaturityAssessment, MaturityScorer, QuestionnaireError, QuestionnaireMode,
};
use crate::ports::{QuestionnaireSource, QuestionnaireSourceError};

/// Result of a scorecard query.
pub type GetScorecardResult = MaturityAssessment;

/// Errors raised while producing the scorecard.
#[derive(Debug, Error)]
pub enum ScorecardError {
    #[error("No questionnaire source is configured")]
    NotConfigured,

    #[error(transparent)]
    Source(#[from] QuestionnaireSourceError),

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
}

impl ScorecardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScorecardError::NotConfigured => ErrorCode::SourceUnavailable,
            ScorecardError::Source(err) => err.code(),
            ScorecardError::Questionnaire(err) => err.code(),
        }
    }
}

/// Handler for the standing scorecard.
pub struct GetScorecardHandler {
    scorer: MaturityScorer,
    source: Option<Arc<dyn QuestionnaireSource>>,
    mode: QuestionnaireMode,
}

impl GetScorecardHandler {
    pub fn new(
        scorer: MaturityScorer,
        source: Option<Arc<dyn QuestionnaireSource>>,
        mode: QuestionnaireMode,
    ) -> Self {
        Self {
            scorer,
            source,
            mode,
        }
    }

    pub async fn handle(&self) -> Result<GetScorecardResult, ScorecardError> {
        let source = self.source.as_ref().ok_or(ScorecardError::NotConfigured)?;

        let rows = source.load_rows().await.map_err(|e| {
            tracing::warn!(source = %source.describe(), "Failed to load questionnaire: {}", e);
            e
        })?;

        let assessment = self.scorer.assess(&rows, self.mode)?;
        tracing::debug!(
            source = %source.describe(),
            items = assessment.summary.total_items,
            "Scored questionnaire from source"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::maturity::QuestionRow;
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct MockSource {
        rows: Vec<QuestionRow>,
        missing: bool,
    }

    impl MockSource {
        fn with_rows(rows: Vec<QuestionRow>) -> Self {
            Self {
                rows,
                missing: false,
            }
        }

        fn missing() -> Self {
            Self {
                rows: Vec::new(),
                missing: true,
            }
        }
    }

    #[async_trait]
    impl QuestionnaireSource for MockSource {
        async fn load_rows(&self) -> Result<Vec<QuestionRow>, QuestionnaireSourceError> {
            if self.missing {
                return Err(QuestionnaireSourceError::NotFound("scorecard.json".to_string()));
            }
            Ok(self.rows.clone())
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    fn handler_with(source: MockSource, mode: QuestionnaireMode) -> GetScorecardHandler {
        GetScorecardHandler::new(MaturityScorer::new(), Some(Arc::new(source)), mode)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_scores_rows_from_source() {
        let source = MockSource::with_rows(vec![
            QuestionRow::new("Asset inventory?", "YES"),
            QuestionRow::new("MFA everywhere?", "no"),
        ]);
        let handler = handler_with(source, QuestionnaireMode::Permissive);

        let assessment = handler.handle().await.unwrap();

        assert_eq!(assessment.items.len(), 2);
        assert_eq!(assessment.summary.yes_count, 1);
    }

    #[tokio::test]
    async fn test_not_configured() {
        let handler = GetScorecardHandler::new(
            MaturityScorer::new(),
            None,
            QuestionnaireMode::Permissive,
        );

        let err = handler.handle().await.unwrap_err();

        assert!(matches!(err, ScorecardError::NotConfigured));
        assert_eq!(err.code(), ErrorCode::SourceUnavailable);
    }

    #[tokio::test]
    async fn test_source_failure_is_propagated() {
        let handler = handler_with(MockSource::missing(), QuestionnaireMode::Permissive);

        let err = handler.handle().await.unwrap_err();

        assert!(matches!(
            err,
            ScorecardError::Source(QuestionnaireSourceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_blank_question() {
        let source = MockSource::with_rows(vec![QuestionRow {
            question: Some("   ".to_string()),
            response: Some("YES".to_string()),
        }]);
        let handler = handler_with(source, QuestionnaireMode::Strict);

        let err = handler.handle().await.unwrap_err();

        assert!(matches!(
            err,
            ScorecardError::Questionnaire(QuestionnaireError::EmptyQuestion { index: 0 })
        ));
    }
}
