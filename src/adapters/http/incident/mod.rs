//! Incident walkthrough HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::IncidentAppState;
pub use routes::incident_router;
