//! Incident script - fixed, ordered narration steps with pacing.

use serde::Serialize;
use std::time::Duration;

use crate::domain::foundation::{Percentage, ValidationError};

/// One narrated step of the simulated incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentStep {
    /// 1-based position in the script.
    pub sequence: usize,
    pub title: String,
    pub narration: String,
    /// Time between the previous step completing and this one completing.
    pub delay_ms: u64,
    /// Share of the script complete once this step is done.
    pub progress: Percentage,
}

impl IncidentStep {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Where a playback stands at a given elapsed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentProgress {
    pub completed_steps: usize,
    pub total_steps: usize,
    pub progress: Percentage,
    /// Most recently completed step.
    pub last_completed: Option<IncidentStep>,
    /// Step currently playing, `None` once finished.
    pub current: Option<IncidentStep>,
    pub finished: bool,
}

/// Ordered, finite list of incident steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentScript {
    steps: Vec<IncidentStep>,
}

impl IncidentScript {
    /// Builds a script from `(title, narration, delay)` triples.
    pub fn new<I, T, N>(steps: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (T, N, Duration)>,
        T: Into<String>,
        N: Into<String>,
    {
        let raw: Vec<(String, String, Duration)> = steps
            .into_iter()
            .map(|(title, narration, delay)| (title.into(), narration.into(), delay))
            .collect();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("steps"));
        }

        let total = raw.len();
        let mut steps = Vec::with_capacity(total);
        for (i, (title, narration, delay)) in raw.into_iter().enumerate() {
            if title.trim().is_empty() {
                return Err(ValidationError::empty_field("title"));
            }
            let delay_ms = u64::try_from(delay.as_millis()).map_err(|_| {
                ValidationError::invalid_format("delay", "step delay does not fit in milliseconds")
            })?;
            steps.push(IncidentStep {
                sequence: i + 1,
                title,
                narration,
                delay_ms,
                progress: Percentage::from_ratio(i + 1, total),
            });
        }
        Ok(Self { steps })
    }

    /// The five-step outage drill shown in the console.
    pub fn standard() -> Self {
        let step = |sequence: usize, title: &str, narration: &str| IncidentStep {
            sequence,
            title: title.to_string(),
            narration: narration.to_string(),
            delay_ms: 2_000,
            progress: Percentage::from_ratio(sequence, 5),
        };
        Self {
            steps: vec![
                step(
                    1,
                    "Detection",
                    "AIOps flags packet loss on the WAN edge of a regional store cluster.",
                ),
                step(
                    2,
                    "Triage",
                    "Telemetry is correlated; a failed uplink on the edge router is the likely cause.",
                ),
                step(
                    3,
                    "Containment",
                    "Traffic fails over to the 5G backup link; point-of-sale stays online.",
                ),
                step(
                    4,
                    "Remediation",
                    "Zero-touch provisioning pushes a corrected configuration to the router.",
                ),
                step(
                    5,
                    "Recovery",
                    "Primary uplink restored and verified; the incident is closed.",
                ),
            ],
        }
    }

    pub fn steps(&self) -> &[IncidentStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all step delays.
    pub fn duration(&self) -> Duration {
        self.steps.iter().map(IncidentStep::delay).sum()
    }

    /// Number of steps complete after `elapsed`.
    pub fn completed_at(&self, elapsed: Duration) -> usize {
        let mut deadline = Duration::ZERO;
        let mut completed = 0;
        for step in &self.steps {
            deadline += step.delay();
            if elapsed < deadline {
                break;
            }
            completed += 1;
        }
        completed
    }

    /// Playback state after `elapsed` has passed since the start.
    pub fn progress_at(&self, elapsed: Duration) -> IncidentProgress {
        let completed = self.completed_at(elapsed);
        let total = self.steps.len();
        IncidentProgress {
            completed_steps: completed,
            total_steps: total,
            progress: Percentage::from_ratio(completed, total),
            last_completed: completed.checked_sub(1).map(|i| self.steps[i].clone()),
            current: self.steps.get(completed).cloned(),
            finished: completed == total,
        }
    }
}

impl Default for IncidentScript {
    fn default() -> Self {
        Self::standard()
    }
}
