//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `cost_model` - Program cost simulation (modules, discount tiers, breakdown)
//! - `maturity` - Cybersecurity maturity questionnaire scoring
//! - `tracker` - KPI and savings session logs
//! - `incident` - Scripted incident walkthrough
//!
//! `cost_model` and `maturity` are pure and stateless; neither depends on
//! the other or on any port.

pub mod cost_model;
pub mod foundation;
pub mod incident;
pub mod maturity;
pub mod tracker;
