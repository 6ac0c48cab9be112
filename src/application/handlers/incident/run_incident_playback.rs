//! RunIncidentPlaybackHandler - Plays the incident script against the clock.
//!
//! A background task polls an [`IncidentPlayback`] on a fixed interval and
//! forwards each step as it comes due. Dropping the receiver stops the task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::domain::incident::{IncidentPlayback, IncidentScript, IncidentStep};
use crate::ports::Clock;

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Command to start a playback.
#[derive(Debug, Clone, Copy)]
pub struct RunIncidentPlaybackCommand {
    /// How often the clock is consulted. Clamped to at least 10ms.
    pub poll_interval: Duration,
}

impl Default for RunIncidentPlaybackCommand {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// Handler that streams incident steps in real time.
pub struct RunIncidentPlaybackHandler {
    script: Arc<IncidentScript>,
    clock: Arc<dyn Clock>,
}

impl RunIncidentPlaybackHandler {
    pub fn new(script: Arc<IncidentScript>, clock: Arc<dyn Clock>) -> Self {
        Self { script, clock }
    }

    /// Starts the playback and returns a receiver yielding steps in order.
    ///
    /// The channel closes after the last step. Must be called inside a
    /// tokio runtime.
    pub fn handle(&self, cmd: RunIncidentPlaybackCommand) -> mpsc::Receiver<IncidentStep> {
        let (tx, rx) = mpsc::channel(self.script.len().max(1));
        let mut playback = IncidentPlayback::start(self.script.as_ref().clone(), self.clock.now());
        let clock = Arc::clone(&self.clock);
        let period = cmd.poll_interval.max(MIN_POLL_INTERVAL);

        tracing::info!(
            steps = self.script.len(),
            duration_secs = self.script.duration().as_secs(),
            "Incident playback started"
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            while !playback.is_finished() {
                ticker.tick().await;
                for step in playback.poll(clock.now()) {
                    tracing::debug!(sequence = step.sequence, title = %step.title, "Incident step");
                    if tx.send(step).await.is_err() {
                        tracing::debug!("Incident playback receiver dropped");
                        return;
                    }
                }
            }
            tracing::info!("Incident playback finished");
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ManualClock;
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn test_steps_follow_the_clock() {
        let clock = Arc::new(ManualClock::new(Timestamp::now()));
        let handler = RunIncidentPlaybackHandler::new(
            Arc::new(IncidentScript::standard()),
            clock.clone(),
        );
        let mut rx = handler.handle(RunIncidentPlaybackCommand {
            poll_interval: Duration::from_millis(10),
        });

        clock.advance(Duration::from_secs(2));
        let first = rx.recv().await.unwrap();
        assert_eq!(first.title, "Detection");

        clock.advance(Duration::from_secs(8));
        let mut rest = Vec::new();
        while let Some(step) = rx.recv().await {
            rest.push(step.sequence);
        }
        assert_eq!(rest, vec![2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_zero_delay_script_completes_immediately() {
        let script = IncidentScript::new(vec![
            ("Alert", "Pager fires", Duration::ZERO),
            ("Close", "Resolved", Duration::ZERO),
        ])
        .unwrap();
        let handler = RunIncidentPlaybackHandler::new(
            Arc::new(script),
            Arc::new(ManualClock::new(Timestamp::now())),
        );

        let mut rx = handler.handle(RunIncidentPlaybackCommand::default());

        assert_eq!(rx.recv().await.unwrap().title, "Alert");
        assert_eq!(rx.recv().await.unwrap().title, "Close");
        assert!(rx.recv().await.is_none());
    }
}
