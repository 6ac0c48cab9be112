//! JSON file questionnaire source.
//!
//! Reads an assessment sheet exported as a JSON array of
//! `{ "question": ..., "response": ... }` objects. Either field may be
//! missing or null; normalization happens in the scorer.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::maturity::QuestionRow;
use crate::ports::{QuestionnaireSource, QuestionnaireSourceError};

/// Loads questionnaire rows from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileQuestionnaireSource {
    path: PathBuf,
}

impl JsonFileQuestionnaireSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionnaireSource for JsonFileQuestionnaireSource {
    async fn load_rows(&self) -> Result<Vec<QuestionRow>, QuestionnaireSourceError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Questionnaire file missing: {}", self.path.display());
                return Err(QuestionnaireSourceError::NotFound(
                    self.path.display().to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let rows: Vec<QuestionRow> = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} questionnaire rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
