//! Incident playback - steps the script forward against an external clock.

use super::{IncidentProgress, IncidentScript, IncidentStep};
use crate::domain::foundation::Timestamp;

/// A running incident simulation.
///
/// Holds no timer of its own: callers pass the current time in on every
/// poll, and the playback reports whatever steps have come due since.
#[derive(Debug, Clone)]
pub struct IncidentPlayback {
    script: IncidentScript,
    started_at: Timestamp,
    reported: usize,
}

impl IncidentPlayback {
    pub fn start(script: IncidentScript, now: Timestamp) -> Self {
        Self {
            script,
            started_at: now,
            reported: 0,
        }
    }

    /// Steps completed since the previous poll, in order.
    pub fn poll(&mut self, now: Timestamp) -> Vec<IncidentStep> {
        let completed = self.script.completed_at(now.elapsed_since(&self.started_at));
        if completed <= self.reported {
            return Vec::new();
        }
        let due = self.script.steps()[self.reported..completed].to_vec();
        self.reported = completed;
        due
    }

    pub fn progress(&self, now: Timestamp) -> IncidentProgress {
        self.script
            .progress_at(now.elapsed_since(&self.started_at))
    }

    /// True once every step has been reported by [`poll`](Self::poll).
    pub fn is_finished(&self) -> bool {
        self.reported == self.script.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn poll_reports_each_step_once() {
        let start = Timestamp::now();
        let mut playback = IncidentPlayback::start(IncidentScript::standard(), start);

        assert!(playback.poll(start.plus(Duration::from_secs(1))).is_empty());

        let due = playback.poll(start.plus(Duration::from_secs(2)));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].title, "Detection");

        assert!(playback.poll(start.plus(Duration::from_secs(3))).is_empty());
    }

    #[test]
    fn late_poll_catches_up() {
        let start = Timestamp::now();
        let mut playback = IncidentPlayback::start(IncidentScript::standard(), start);

        let due = playback.poll(start.plus(Duration::from_secs(7)));
        let titles: Vec<&str> = due.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Detection", "Triage", "Containment"]);
        assert!(!playback.is_finished());

        let rest = playback.poll(start.plus(Duration::from_secs(30)));
        assert_eq!(rest.len(), 2);
        assert!(playback.is_finished());
    }

    #[test]
    fn progress_reflects_elapsed_time() {
        let start = Timestamp::now();
        let playback = IncidentPlayback::start(IncidentScript::standard(), start);
        let progress = playback.progress(start.plus(Duration::from_secs(6)));
        assert_eq!(progress.completed_steps, 3);
        assert_eq!(progress.progress.value(), 60);
    }

    #[test]
    fn clock_going_backwards_reports_nothing() {
        let start = Timestamp::now().plus(Duration::from_secs(100));
        let mut playback = IncidentPlayback::start(IncidentScript::standard(), start);
        assert!(playback.poll(Timestamp::now()).is_empty());
    }
}
