//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Pure calculations (cost, maturity, incident progress) have synchronous
//! handlers; anything touching a port is async.

pub mod handlers;

pub use handlers::{
    // Cost handlers
    ComputeCostHandler, ComputeCostQuery, CostModuleList, ListCostModulesHandler,
    // Maturity handlers
    AssessMaturityCommand, AssessMaturityHandler, GetScorecardHandler, ScorecardError,
    // Tracker handlers
    CreateSessionLogHandler, GetSessionLogHandler, GetSessionLogQuery, RecordKpiCommand,
    RecordKpiHandler, RecordSavingsCommand, RecordSavingsHandler,
    // Incident handlers
    GetIncidentProgressHandler, GetIncidentProgressQuery, GetIncidentScriptHandler,
    RunIncidentPlaybackCommand, RunIncidentPlaybackHandler,
};
