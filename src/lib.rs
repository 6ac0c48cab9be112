//! Rollout Console - Store network modernization program console
//!
//! This crate implements the analytic core of the program console: a
//! per-store cost simulator with discount tiers, a cybersecurity maturity
//! scorecard over a yes/no questionnaire, a KPI and savings tracker, and a
//! scripted incident-response walkthrough, all exposed over a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
