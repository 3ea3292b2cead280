use async_trait::async_trait;
use league_registry::Player;

/// External value oracle.
///
/// Implementations look up a player's market value from a live data source.
/// The contract is deliberately loose: an oracle may fail, or return a
/// non-finite or non-positive number; [`crate::ValueSource`] treats all of
/// those as "unavailable" and falls back to the heuristic.
#[async_trait]
pub trait ValueOracle: Send + Sync {
    /// Look up a player's external value
    async fn player_value(&self, player: &Player) -> anyhow::Result<f64>;
}
