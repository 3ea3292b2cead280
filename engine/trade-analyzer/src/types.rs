//! Type definitions for roster evaluation and trade analysis

use chrono::{DateTime, Utc};
use league_registry::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use valuation_engine::ValuedPlayer;

/// Aggregate scores for one position on a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionScore {
    /// Mean value of the top starter-slot players
    pub starter_score: i64,

    /// Mean value of the next players behind the starters
    pub depth_score: i64,

    /// Total players at this position
    pub count: usize,
}

/// Evaluation of one roster at one point in time.
///
/// Created fresh per call and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEvaluation {
    /// Valued players in roster order
    pub players: Vec<ValuedPlayer>,

    /// Sum of every player's value, starters and bench alike
    pub total_value: i64,

    /// Per-position scores, reporting order, positions present only
    pub scores: BTreeMap<Position, PositionScore>,

    /// Positions whose starters clear the strength threshold
    pub strengths: Vec<Position>,

    /// Positions with weak starters or too few bodies
    pub weaknesses: Vec<Position>,
}

/// Three-way outcome of a trade evaluation, from the proposing team's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Fair,
    UserGainsValue,
    UserLosesValue,
}

/// A proposed trade between two teams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeProposal {
    /// Team proposing the trade (the perspective holder)
    pub from_team_id: String,

    /// Team on the other side
    pub to_team_id: String,

    /// Player IDs leaving the proposing team
    pub offer_from_ids: Vec<String>,

    /// Player IDs leaving the other team
    pub offer_to_ids: Vec<String>,
}

/// One side's view of a trade: the team before and after the swap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamTradeView {
    pub team_id: String,
    pub team_name: String,
    pub before: RosterEvaluation,
    pub after: RosterEvaluation,
}

/// Complete result of a trade analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeResult {
    /// Summed value of the players the proposing team gives up
    pub offer_from_value: i64,

    /// Summed value of the players the proposing team receives
    pub offer_to_value: i64,

    /// offer_to_value - offer_from_value; positive favors the proposer
    pub value_delta: i64,

    /// Fairness verdict from the proposing team's perspective
    pub verdict: Verdict,

    /// Ordered human-readable rationale
    pub rationale: Vec<String>,

    /// Proposing team before/after
    pub from_team: TeamTradeView,

    /// Other team before/after
    pub to_team: TeamTradeView,

    /// Players the proposing team sends (resolved and valued)
    pub sent: Vec<ValuedPlayer>,

    /// Players the proposing team receives (resolved and valued)
    pub received: Vec<ValuedPlayer>,

    /// When this analysis was produced
    pub generated_at: DateTime<Utc>,
}
