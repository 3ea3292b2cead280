use crate::config::ValuationConfig;
use league_registry::Player;
use tracing::debug;

/// Heuristic player value calculator.
///
/// Pure and deterministic: position base value plus name-based bonuses,
/// floored. No I/O.
pub struct HeuristicCalculator {
    config: ValuationConfig,
}

impl HeuristicCalculator {
    /// Create a new calculator
    pub fn new(config: ValuationConfig) -> Self {
        Self { config }
    }

    /// Compute a player's heuristic value
    pub fn player_value(&self, player: &Player) -> i64 {
        let base = self.config.base_for_position(player.position);
        let bonus = self.name_bonus(&player.name);
        let value = (base + bonus).max(self.config.floor);

        debug!(
            "Heuristic value for {}: {} (base: {}, bonus: {})",
            player.name, value, base, bonus
        );

        value
    }

    /// Net name-based adjustment: elite or breakout bonus (elite wins),
    /// plus the risk penalty when flagged
    fn name_bonus(&self, name: &str) -> i64 {
        let names = &self.config.names;
        let bonuses = &self.config.bonuses;

        let mut bonus = if names.is_elite(name) {
            bonuses.elite_bonus
        } else if names.is_breakout(name) {
            bonuses.breakout_bonus
        } else {
            0
        };

        if names.is_risk(name) {
            bonus -= bonuses.risk_penalty;
        }

        bonus
    }

    /// The configuration in use
    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_registry::Position;

    fn calculator() -> HeuristicCalculator {
        HeuristicCalculator::new(ValuationConfig::default())
    }

    #[test]
    fn test_position_base_values() {
        let calc = calculator();

        assert_eq!(calc.player_value(&Player::new("p1", "Nobody Special", Position::RB)), 80);
        assert_eq!(calc.player_value(&Player::new("p2", "Nobody Special", Position::WR)), 75);
        assert_eq!(calc.player_value(&Player::new("p3", "Nobody Special", Position::QB)), 40);
        assert_eq!(calc.player_value(&Player::new("p4", "Nobody Special", Position::K)), 10);
    }

    #[test]
    fn test_elite_takes_precedence_over_breakout() {
        let mut config = ValuationConfig::default();
        config.names.elite.insert("Both Lists".to_string());
        config.names.breakout.insert("Both Lists".to_string());
        let calc = HeuristicCalculator::new(config);

        // Elite bonus only, never both
        let value = calc.player_value(&Player::new("p1", "Both Lists", Position::WR));
        assert_eq!(value, 75 + 20);
    }

    #[test]
    fn test_risk_penalty_stacks_with_bonuses() {
        let mut config = ValuationConfig::default();
        config.names.elite.insert("Hurt Star".to_string());
        config.names.risk.insert("Hurt Star".to_string());
        config.names.risk.insert("Hurt Backup".to_string());
        let calc = HeuristicCalculator::new(config);

        let star = calc.player_value(&Player::new("p1", "Hurt Star", Position::RB));
        assert_eq!(star, 80 + 20 - 8);

        let backup = calc.player_value(&Player::new("p2", "Hurt Backup", Position::TE));
        assert_eq!(backup, 40 - 8);
    }

    #[test]
    fn test_floor_applies_after_summing() {
        let mut config = ValuationConfig::default();
        config.names.risk.insert("Shaky Kicker".to_string());
        let calc = HeuristicCalculator::new(config);

        // 10 - 8 = 2, floored to 10
        let value = calc.player_value(&Player::new("p1", "Shaky Kicker", Position::K));
        assert_eq!(value, 10);
    }

    #[test]
    fn test_floor_invariant_over_default_tables() {
        let calc = calculator();
        let config = ValuationConfig::default();

        for position in Position::ALL {
            for name in config
                .names
                .elite
                .iter()
                .chain(config.names.breakout.iter())
                .chain(config.names.risk.iter())
            {
                let value = calc.player_value(&Player::new("px", name.clone(), position));
                assert!(value >= 10, "{name} at {position} valued below floor: {value}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let calc = calculator();
        let player = Player::new("p1", "Lamar Jackson", Position::QB);

        assert_eq!(calc.player_value(&player), calc.player_value(&player));
        // Elite QB: 40 + 20
        assert_eq!(calc.player_value(&player), 60);
    }
}
