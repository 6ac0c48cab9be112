//! Incident Module - Scripted incident-response walkthrough.
//!
//! The narrative is a finite sequence of steps. Pacing comes from elapsed
//! time supplied by the caller, so nothing here blocks or sleeps.

mod playback;
mod script;

pub use playback::IncidentPlayback;
pub use script::{IncidentProgress, IncidentScript, IncidentStep};
