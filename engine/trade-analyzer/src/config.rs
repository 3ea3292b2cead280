use league_registry::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for roster evaluation and trade analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Required starting slots per position
    pub starter_slots: HashMap<Position, usize>,

    /// Starting slots for positions not in the table
    pub starter_slots_default: usize,

    /// How many post-starter values feed the depth score
    pub depth_sample: usize,

    /// Starter score at or above which a position is a strength
    pub strength_threshold: i64,

    /// Starter score below which a position is a weakness
    pub weakness_threshold: i64,

    /// Fairness scale as a fraction of the larger offer value
    pub fairness_ratio: f64,

    /// Minimum fairness scale regardless of deal size
    pub fairness_floor: i64,

    /// Minimum starter-score swing worth reporting
    pub starter_shift_min: i64,

    /// Minimum depth-score swing worth reporting
    pub depth_shift_min: i64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let mut starter_slots = HashMap::new();
        starter_slots.insert(Position::QB, 1);
        starter_slots.insert(Position::RB, 2);
        starter_slots.insert(Position::WR, 3);
        starter_slots.insert(Position::TE, 1);
        starter_slots.insert(Position::DST, 1);
        starter_slots.insert(Position::K, 1);

        Self {
            starter_slots,
            starter_slots_default: 1,
            depth_sample: 2,
            strength_threshold: 75,
            weakness_threshold: 60,
            fairness_ratio: 0.12,
            fairness_floor: 20,
            starter_shift_min: 8,
            depth_shift_min: 10,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(strength) = std::env::var("ANALYZER_STRENGTH_THRESHOLD") {
            config.strength_threshold = strength.parse().unwrap_or(75);
        }

        if let Ok(weakness) = std::env::var("ANALYZER_WEAKNESS_THRESHOLD") {
            config.weakness_threshold = weakness.parse().unwrap_or(60);
        }

        if let Ok(ratio) = std::env::var("ANALYZER_FAIRNESS_RATIO") {
            config.fairness_ratio = ratio.parse().unwrap_or(0.12);
        }

        if let Ok(floor) = std::env::var("ANALYZER_FAIRNESS_FLOOR") {
            config.fairness_floor = floor.parse().unwrap_or(20);
        }

        Ok(config)
    }

    /// Get the required starter count for a position
    pub fn slots_for_position(&self, position: Position) -> usize {
        self.starter_slots.get(&position).copied().unwrap_or(self.starter_slots_default)
    }
}
