//! In-memory questionnaire source, for fixtures and tests.

use async_trait::async_trait;

use crate::domain::maturity::QuestionRow;
use crate::ports::{QuestionnaireSource, QuestionnaireSourceError};

/// Serves a fixed list of rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionnaireSource {
    rows: Vec<QuestionRow>,
}

impl InMemoryQuestionnaireSource {
    pub fn new(rows: Vec<QuestionRow>) -> Self {
        Self { rows }
    }

    /// Builds a source from `(question, response)` pairs.
    pub fn from_pairs<Q, R>(pairs: impl IntoIterator<Item = (Q, R)>) -> Self
    where
        Q: Into<String>,
        R: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(q, r)| QuestionRow::new(q, r))
                .collect(),
        )
    }
}

#[async_trait]
impl QuestionnaireSource for InMemoryQuestionnaireSource {
    async fn load_rows(&self) -> Result<Vec<QuestionRow>, QuestionnaireSourceError> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.rows.len())
    }
}
