//! League Registry - fantasy league domain model
//!
//! This module holds the player, team, and league types shared by the
//! valuation and trade-analysis engines, plus id lookups across a league.

pub mod league;
pub mod types;

pub use league::{League, LeagueData};
pub use types::{LeagueLookupError, Player, Position, Team};
