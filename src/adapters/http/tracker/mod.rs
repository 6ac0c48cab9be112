//! Tracker HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TrackerAppState;
pub use routes::tracker_router;
