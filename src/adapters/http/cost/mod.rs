//! Cost simulator HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CostAppState;
pub use routes::cost_router;
