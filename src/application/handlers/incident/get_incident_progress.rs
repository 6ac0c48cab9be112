//! Incident script query handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::incident::{IncidentProgress, IncidentScript};

/// Handler returning the full incident script.
pub struct GetIncidentScriptHandler {
    script: Arc<IncidentScript>,
}

impl GetIncidentScriptHandler {
    pub fn new(script: Arc<IncidentScript>) -> Self {
        Self { script }
    }

    pub fn handle(&self) -> IncidentScript {
        self.script.as_ref().clone()
    }
}

/// Query for playback state at an offset from the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetIncidentProgressQuery {
    pub elapsed: Duration,
}

/// Handler computing playback state without running a playback.
pub struct GetIncidentProgressHandler {
    script: Arc<IncidentScript>,
}

impl GetIncidentProgressHandler {
    pub fn new(script: Arc<IncidentScript>) -> Self {
        Self { script }
    }

    pub fn handle(&self, query: GetIncidentProgressQuery) -> IncidentProgress {
        self.script.progress_at(query.elapsed)
    }
}
