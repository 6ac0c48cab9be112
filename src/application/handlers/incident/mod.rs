//! Incident walkthrough handlers.

mod get_incident_progress;
mod run_incident_playback;

pub use get_incident_progress::{
    GetIncidentProgressHandler, GetIncidentProgressQuery, GetIncidentScriptHandler,
};
pub use run_incident_playback::{RunIncidentPlaybackCommand, RunIncidentPlaybackHandler};
