//! DTOs for incident walkthrough endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::incident::{IncidentScript, IncidentStep};

/// Query parameters for `GET /api/incident/progress`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressParams {
    /// Seconds since the playback started; fractional values allowed.
    #[serde(default)]
    pub elapsed_secs: f64,
}

/// Query parameters for `GET /api/incident/stream`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamParams {
    /// Clock polling interval in milliseconds.
    pub poll_ms: Option<u64>,
}

/// Incident script response.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentScriptResponse {
    pub steps: Vec<IncidentStep>,
    pub total_duration_ms: u64,
}

impl From<IncidentScript> for IncidentScriptResponse {
    fn from(script: IncidentScript) -> Self {
        Self {
            total_duration_ms: u64::try_from(script.duration().as_millis()).unwrap_or(u64::MAX),
            steps: script.steps().to_vec(),
        }
    }
}
