//! Sleeper value oracle
//!
//! A reference [`valuation_engine::ValueOracle`] implementation backed by
//! the public Sleeper player catalog. The catalog is fetched once and
//! lookups are served from memory; any miss surfaces as an error so the
//! value source degrades to its heuristic for that player.

pub mod client;
pub mod config;

pub use client::{SleeperOracle, SleeperOracleError, SleeperPlayerRecord};
pub use config::SleeperOracleConfig;
