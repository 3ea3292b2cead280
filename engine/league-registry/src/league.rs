use crate::types::{LeagueLookupError, Player, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// A fantasy league: the set of teams under evaluation.
///
/// League data is read-only input to the engines; trade analysis derives new
/// roster snapshots and never mutates the league in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    teams: Vec<Team>,
}

impl League {
    /// Create a league from a list of teams.
    ///
    /// Team IDs must be unique; later duplicates are dropped with a warning.
    pub fn new(teams: Vec<Team>) -> Self {
        let mut unique: Vec<Team> = Vec::with_capacity(teams.len());
        for team in teams {
            if unique.iter().any(|t| t.team_id == team.team_id) {
                warn!("Dropping duplicate team ID: {}", team.team_id);
                continue;
            }
            unique.push(team);
        }
        Self { teams: unique }
    }

    /// Get a team by ID
    pub fn team(&self, team_id: &str) -> Result<&Team, LeagueLookupError> {
        self.teams
            .iter()
            .find(|t| t.team_id == team_id)
            .ok_or_else(|| LeagueLookupError::TeamNotFound(team_id.to_string()))
    }

    /// Find a player by ID anywhere in the league
    pub fn find_player(&self, player_id: &str) -> Result<&Player, LeagueLookupError> {
        self.teams
            .iter()
            .flat_map(|t| t.roster.iter())
            .find(|p| p.player_id == player_id)
            .ok_or_else(|| LeagueLookupError::PlayerNotFound(player_id.to_string()))
    }

    /// All teams in league order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Total number of rostered players
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|t| t.roster.len()).sum()
    }

    /// Check if the league has no teams
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Search for players by partial name match (case-insensitive)
    pub fn search_players(&self, query: &str) -> Vec<&Player> {
        let query_lower = query.to_lowercase();
        self.teams
            .iter()
            .flat_map(|t| t.roster.iter())
            .filter(|p| p.name.to_lowercase().contains(&query_lower))
            .collect()
    }
}

/// Container for league data as stored on disk (mock leagues, fixtures)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueData {
    /// Season year (e.g., "2025")
    pub season: String,

    /// When this data was last updated
    pub last_updated: DateTime<Utc>,

    /// The league itself
    pub league: League,
}

impl LeagueData {
    /// Create a new league data container
    pub fn new(season: impl Into<String>, league: League) -> Self {
        Self { season: season.into(), last_updated: Utc::now(), league }
    }

    /// Load league data from a JSON file
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> anyhow::Result<Self> {
        info!("Loading league data from: {:?}", file_path.as_ref());

        let json_content = tokio::fs::read_to_string(&file_path).await?;
        let data: LeagueData = serde_json::from_str(&json_content)?;

        info!(
            "Loaded league with {} teams and {} players",
            data.league.teams().len(),
            data.league.player_count()
        );
        Ok(data)
    }
}
