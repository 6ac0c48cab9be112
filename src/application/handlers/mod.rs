//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cost;
pub mod incident;
pub mod maturity;
pub mod tracker;

pub use cost::{
    ComputeCostHandler, ComputeCostQuery, ComputeCostResult, CostModuleList,
    ListCostModulesHandler,
};
pub use incident::{
    GetIncidentProgressHandler, GetIncidentProgressQuery, GetIncidentScriptHandler,
    RunIncidentPlaybackCommand, RunIncidentPlaybackHandler,
};
pub use maturity::{
    AssessMaturityCommand, AssessMaturityHandler, GetScorecardHandler, GetScorecardResult,
    ScorecardError,
};
pub use tracker::{
    CreateSessionLogHandler, GetSessionLogHandler, GetSessionLogQuery, GetSessionLogResult,
    RecordKpiCommand, RecordKpiHandler, RecordKpiResult, RecordSavingsCommand,
    RecordSavingsHandler, RecordSavingsResult,
};
