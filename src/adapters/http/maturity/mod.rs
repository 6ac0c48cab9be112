//! Maturity scorecard HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::MaturityAppState;
pub use routes::maturity_router;
