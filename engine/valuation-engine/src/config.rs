use league_registry::Position;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Configuration for the heuristic player valuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Base value per position
    pub base_values: HashMap<Position, i64>,

    /// Base value for positions not in the table
    pub base_default: i64,

    /// Minimum value any player can be assigned
    pub floor: i64,

    /// Name-based bonus parameters
    pub bonuses: BonusParameters,

    /// Curated name tables
    pub names: NameTables,
}

/// Bonus and penalty amounts applied on top of the position base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusParameters {
    /// Bonus for players in the elite table
    pub elite_bonus: i64,

    /// Bonus for players in the breakout table (elite takes precedence)
    pub breakout_bonus: i64,

    /// Penalty for players in the injury/risk table (stacks with either bonus)
    pub risk_penalty: i64,
}

/// Curated player name tables.
///
/// These are data, not logic: exact-match, case-sensitive name sets that can
/// be replaced from a JSON file without touching the valuation code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameTables {
    /// Elite players
    pub elite: HashSet<String>,

    /// Breakout candidates
    pub breakout: HashSet<String>,

    /// Injury/risk flags
    pub risk: HashSet<String>,
}

impl NameTables {
    /// Load name tables from a JSON file
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> anyhow::Result<Self> {
        info!("Loading name tables from: {:?}", file_path.as_ref());

        let json_content = tokio::fs::read_to_string(&file_path).await?;
        let tables: NameTables = serde_json::from_str(&json_content)?;

        info!(
            "Loaded name tables: {} elite, {} breakout, {} risk",
            tables.elite.len(),
            tables.breakout.len(),
            tables.risk.len()
        );
        Ok(tables)
    }

    /// Check elite membership (exact, case-sensitive)
    pub fn is_elite(&self, name: &str) -> bool {
        self.elite.contains(name)
    }

    /// Check breakout membership (exact, case-sensitive)
    pub fn is_breakout(&self, name: &str) -> bool {
        self.breakout.contains(name)
    }

    /// Check risk membership (exact, case-sensitive)
    pub fn is_risk(&self, name: &str) -> bool {
        self.risk.contains(name)
    }
}

impl Default for NameTables {
    fn default() -> Self {
        let elite = [
            "Ja'Marr Chase",
            "Justin Jefferson",
            "CeeDee Lamb",
            "Puka Nacua",
            "Amon-Ra St. Brown",
            "Bijan Robinson",
            "Saquon Barkley",
            "Jahmyr Gibbs",
            "Derrick Henry",
            "Lamar Jackson",
            "Josh Allen",
            "Brock Bowers",
        ];
        let breakout = [
            "Malik Nabers",
            "Brian Thomas Jr.",
            "Drake London",
            "Ladd McConkey",
            "Jaxon Smith-Njigba",
            "De'Von Achane",
            "Bucky Irving",
            "Kyren Williams",
            "Jayden Daniels",
            "Trey McBride",
        ];
        let risk = [
            "Christian McCaffrey",
            "Cooper Kupp",
            "Tua Tagovailoa",
            "Chris Godwin",
            "Rashee Rice",
            "T.J. Hockenson",
        ];

        Self {
            elite: elite.iter().map(|n| n.to_string()).collect(),
            breakout: breakout.iter().map(|n| n.to_string()).collect(),
            risk: risk.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl Default for ValuationConfig {
    fn default() -> Self {
        let mut base_values = HashMap::new();
        base_values.insert(Position::QB, 40);
        base_values.insert(Position::RB, 80);
        base_values.insert(Position::WR, 75);
        base_values.insert(Position::TE, 40);
        base_values.insert(Position::DST, 10);
        base_values.insert(Position::K, 10);

        Self {
            base_values,
            base_default: 40,
            floor: 10,
            bonuses: BonusParameters { elite_bonus: 20, breakout_bonus: 12, risk_penalty: 8 },
            names: NameTables::default(),
        }
    }
}

impl ValuationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(floor) = std::env::var("VALUATION_FLOOR") {
            config.floor = floor.parse().unwrap_or(10);
        }

        if let Ok(elite) = std::env::var("VALUATION_ELITE_BONUS") {
            config.bonuses.elite_bonus = elite.parse().unwrap_or(20);
        }

        if let Ok(breakout) = std::env::var("VALUATION_BREAKOUT_BONUS") {
            config.bonuses.breakout_bonus = breakout.parse().unwrap_or(12);
        }

        if let Ok(risk) = std::env::var("VALUATION_RISK_PENALTY") {
            config.bonuses.risk_penalty = risk.parse().unwrap_or(8);
        }

        Ok(config)
    }

    /// Replace the curated name tables
    pub fn with_names(mut self, names: NameTables) -> Self {
        self.names = names;
        self
    }

    /// Get the base value for a position
    pub fn base_for_position(&self, position: Position) -> i64 {
        self.base_values.get(&position).copied().unwrap_or(self.base_default)
    }
}
