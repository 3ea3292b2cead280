use serde::{Deserialize, Serialize};
use std::fmt;

/// Fantasy roster position.
///
/// Declaration order is the canonical reporting order; score maps keyed by
/// position iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    #[serde(alias = "DEF")]
    DST,
    K,
}

impl Position {
    /// All positions in reporting order
    pub const ALL: [Position; 6] =
        [Position::QB, Position::RB, Position::WR, Position::TE, Position::DST, Position::K];

    /// Parse a position code (e.g., "QB"). Accepts "DEF" as an alias for DST.
    pub fn from_code(code: &str) -> Option<Position> {
        match code {
            "QB" => Some(Position::QB),
            "RB" => Some(Position::RB),
            "WR" => Some(Position::WR),
            "TE" => Some(Position::TE),
            "DST" | "DEF" => Some(Position::DST),
            "K" => Some(Position::K),
            _ => None,
        }
    }

    /// Position code as used in league data (e.g., "QB", "DST")
    pub fn code(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DST => "DST",
            Position::K => "K",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A fantasy football player on a league roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// League-unique player ID
    pub player_id: String,

    /// Player name (e.g., "Lamar Jackson"); exact-match lookup key
    pub name: String,

    /// Roster position
    pub position: Position,
}

impl Player {
    /// Create a new player
    pub fn new(player_id: impl Into<String>, name: impl Into<String>, position: Position) -> Self {
        Self { player_id: player_id.into(), name: name.into(), position }
    }
}

/// A fantasy team and its roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// League-unique team ID
    pub team_id: String,

    /// Team name (e.g., "Gridiron Gurus")
    pub name: String,

    /// Roster in league order; order is preserved on output
    pub roster: Vec<Player>,
}

impl Team {
    /// Create a new team
    pub fn new(team_id: impl Into<String>, name: impl Into<String>, roster: Vec<Player>) -> Self {
        Self { team_id: team_id.into(), name: name.into(), roster }
    }
}

/// Errors that can occur during league lookups
#[derive(Debug, Clone)]
pub enum LeagueLookupError {
    /// Team not found in league
    TeamNotFound(String),

    /// Player not found on any roster
    PlayerNotFound(String),
}

impl fmt::Display for LeagueLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueLookupError::TeamNotFound(id) => {
                write!(f, "Team '{id}' not found in league")
            }
            LeagueLookupError::PlayerNotFound(id) => {
                write!(f, "Player '{id}' not found on any roster")
            }
        }
    }
}

impl std::error::Error for LeagueLookupError {}
