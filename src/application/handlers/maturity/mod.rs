//! Maturity scorecard handlers.

mod assess_maturity;
mod get_scorecard;

pub use assess_maturity::{AssessMaturityCommand, AssessMaturityHandler};
pub use get_scorecard::{GetScorecardHandler, GetScorecardResult, ScorecardError};
