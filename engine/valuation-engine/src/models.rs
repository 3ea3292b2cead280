use league_registry::{Player, Position};
use serde::{Deserialize, Serialize};

/// Where a player's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueBasis {
    /// Resolved by the external value oracle
    External,

    /// Computed by the local heuristic
    Fallback,
}

/// A player with a resolved value.
///
/// Immutable once computed for an evaluation pass; re-resolving a player
/// produces a fresh instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuedPlayer {
    /// League-unique player ID
    pub player_id: String,

    /// Player name
    pub name: String,

    /// Roster position
    pub position: Position,

    /// Resolved value (always positive)
    pub value: i64,

    /// Source of the value
    pub basis: ValueBasis,
}

impl ValuedPlayer {
    /// Attach a resolved value to a player
    pub fn from_player(player: &Player, value: i64, basis: ValueBasis) -> Self {
        Self {
            player_id: player.player_id.clone(),
            name: player.name.clone(),
            position: player.position,
            value,
            basis,
        }
    }
}
