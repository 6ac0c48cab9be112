//! Storage Adapters
//!
//! Implementations of the SessionLogStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionLogStore** - Keeps logs in memory until the process exits

mod in_memory_session_log_store;

pub use in_memory_session_log_store::InMemorySessionLogStore;
