//! Error types for trade analysis

use thiserror::Error;

/// Result type for trade-analyzer operations
pub type Result<T> = std::result::Result<T, TradeAnalyzerError>;

/// Errors that abort an analysis call.
///
/// Everything else (unknown offered player ids, oracle failures) is absorbed
/// locally and never surfaces here.
#[derive(Error, Debug)]
pub enum TradeAnalyzerError {
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Trade references the same team on both sides: {0}")]
    SameTeam(String),
}
