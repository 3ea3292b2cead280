//! Trade Analyzer
//!
//! Evaluates rosters and proposed trades: aggregates per-position starter
//! and depth scores, sums total roster value, and turns two rosters'
//! before/after evaluations into a verdict with a human-readable rationale.

pub mod analyzer;
pub mod config;
pub mod diff;
pub mod error;
pub mod roster;
pub mod types;

pub use analyzer::TradeAnalyzer;
pub use config::AnalyzerConfig;
pub use error::{Result, TradeAnalyzerError};
pub use roster::RosterEvaluator;
pub use types::{
    PositionScore, RosterEvaluation, TeamTradeView, TradeProposal, TradeResult, Verdict,
};
