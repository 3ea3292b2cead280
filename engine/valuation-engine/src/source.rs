use crate::calculator::HeuristicCalculator;
use crate::config::ValuationConfig;
use crate::models::{ValueBasis, ValuedPlayer};
use crate::oracle::ValueOracle;
use dashmap::DashMap;
use league_registry::Player;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves player values: external oracle first, heuristic fallback.
///
/// The cache is an optimization, not a source of truth: it is keyed on the
/// exact player name, shared across clones, last-write-wins, and every
/// result is reproducible without it (modulo oracle volatility).
#[derive(Clone)]
pub struct ValueSource {
    calculator: Arc<HeuristicCalculator>,
    oracle: Option<Arc<dyn ValueOracle>>,
    cache: Option<Arc<DashMap<String, (i64, ValueBasis)>>>,
}

impl ValueSource {
    /// Create a heuristic-only value source with no cache
    pub fn new(config: ValuationConfig) -> Self {
        Self {
            calculator: Arc::new(HeuristicCalculator::new(config)),
            oracle: None,
            cache: None,
        }
    }

    /// Attach an external value oracle
    pub fn with_oracle(mut self, oracle: Arc<dyn ValueOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Enable the shared per-name value cache
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(Arc::new(DashMap::new()));
        self
    }

    /// Resolve a player's value, consulting the oracle when configured.
    ///
    /// Never fails: any oracle problem degrades to the heuristic for this
    /// player only.
    pub async fn resolve(&self, player: &Player) -> ValuedPlayer {
        if let Some(cache) = &self.cache {
            if let Some(entry) = cache.get(&player.name) {
                let (value, basis) = *entry;
                debug!("Value cache hit for {}: {}", player.name, value);
                return ValuedPlayer::from_player(player, value, basis);
            }
        }

        let (value, basis) = match &self.oracle {
            Some(oracle) => match oracle.player_value(player).await {
                Ok(raw) if raw.is_finite() && raw.round() as i64 > 0 => {
                    (raw.round() as i64, ValueBasis::External)
                }
                Ok(raw) => {
                    warn!("Oracle returned invalid value {} for {}; using heuristic", raw, player.name);
                    (self.calculator.player_value(player), ValueBasis::Fallback)
                }
                Err(e) => {
                    warn!("Oracle lookup failed for {}: {}; using heuristic", player.name, e);
                    (self.calculator.player_value(player), ValueBasis::Fallback)
                }
            },
            None => (self.calculator.player_value(player), ValueBasis::Fallback),
        };

        if let Some(cache) = &self.cache {
            cache.insert(player.name.clone(), (value, basis));
        }

        ValuedPlayer::from_player(player, value, basis)
    }

    /// Resolve a player's value with the heuristic only.
    ///
    /// Synchronous path for call sites that never consult an oracle; does
    /// not read or populate the cache.
    pub fn resolve_heuristic(&self, player: &Player) -> ValuedPlayer {
        let value = self.calculator.player_value(player);
        ValuedPlayer::from_player(player, value, ValueBasis::Fallback)
    }
}
