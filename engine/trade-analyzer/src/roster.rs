use crate::config::AnalyzerConfig;
use crate::types::{PositionScore, RosterEvaluation};
use league_registry::{Player, Position};
use std::collections::BTreeMap;
use valuation_engine::{ValueSource, ValuedPlayer};

/// Aggregates a roster of valued players into per-position scores,
/// strengths, weaknesses, and a total value.
pub struct RosterEvaluator {
    config: AnalyzerConfig,
    source: ValueSource,
}

impl RosterEvaluator {
    /// Create a new roster evaluator
    pub fn new(config: AnalyzerConfig, source: ValueSource) -> Self {
        Self { config, source }
    }

    /// Evaluate a roster, resolving values through the oracle when one is
    /// configured
    pub async fn evaluate(&self, roster: &[Player]) -> RosterEvaluation {
        let mut valued = Vec::with_capacity(roster.len());
        for player in roster {
            valued.push(self.source.resolve(player).await);
        }
        self.aggregate(valued)
    }

    /// Evaluate a roster with heuristic values only
    pub fn evaluate_heuristic(&self, roster: &[Player]) -> RosterEvaluation {
        let valued = roster.iter().map(|p| self.source.resolve_heuristic(p)).collect();
        self.aggregate(valued)
    }

    /// Aggregate already-valued players into a roster evaluation
    pub fn aggregate(&self, players: Vec<ValuedPlayer>) -> RosterEvaluation {
        let mut by_position: BTreeMap<Position, Vec<i64>> = BTreeMap::new();
        for player in &players {
            by_position.entry(player.position).or_default().push(player.value);
        }

        let mut scores = BTreeMap::new();
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        for (position, mut values) in by_position {
            values.sort_unstable_by(|a, b| b.cmp(a));

            let need = self.config.slots_for_position(position);
            let starter_end = values.len().min(need);
            let depth_end = values.len().min(need + self.config.depth_sample);

            let starter_score = mean_rounded(&values[..starter_end]);
            let depth_score = mean_rounded(&values[starter_end..depth_end]);
            let count = values.len();

            if starter_score >= self.config.strength_threshold {
                strengths.push(position);
            }
            if starter_score < self.config.weakness_threshold || count < need {
                weaknesses.push(position);
            }

            scores.insert(position, PositionScore { starter_score, depth_score, count });
        }

        let total_value = players.iter().map(|p| p.value).sum();

        RosterEvaluation { players, total_value, scores, strengths, weaknesses }
    }
}

fn mean_rounded(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    (values.iter().sum::<i64>() as f64 / values.len() as f64).round() as i64
}
