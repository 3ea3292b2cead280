//! Sleeper API integration

use crate::config::SleeperOracleConfig;
use anyhow::Context;
use async_trait::async_trait;
use league_registry::Player;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration as StdDuration;
use thiserror::Error;
use tracing::{debug, info};
use valuation_engine::ValueOracle;

/// Errors that can occur in the Sleeper oracle
#[derive(Error, Debug)]
pub enum SleeperOracleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sleeper API error: {message}")]
    Api { message: String },

    #[error("Player not in Sleeper catalog: {0}")]
    PlayerNotFound(String),
}

/// One player record from the Sleeper catalog (matches actual API response;
/// most fields are omitted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleeperPlayerRecord {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub search_rank: Option<u32>,

    #[serde(default)]
    pub active: bool,
}

/// Value oracle backed by the Sleeper player catalog.
///
/// Sleeper exposes no market value directly; `search_rank` is its relevance
/// ordering, and rank 1 maps to `top_value` with deeper ranks scaling down
/// linearly until `rank_cutoff`. Players past the cutoff, or missing from
/// the catalog, report as errors and fall back to the heuristic upstream.
pub struct SleeperOracle {
    config: SleeperOracleConfig,
    values: HashMap<String, f64>,
}

impl SleeperOracle {
    /// Fetch the player catalog and build the name-keyed value map
    pub async fn load(config: SleeperOracleConfig) -> Result<Self, SleeperOracleError> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(config.request_timeout_secs))
            .build()?;

        let url = format!("{}/players/{}", config.api_base_url, config.sport);
        info!("Fetching Sleeper player catalog from: {}", url);

        let response = client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SleeperOracleError::Api {
                message: format!("Catalog request failed with status: {}", response.status()),
            });
        }

        let records: HashMap<String, SleeperPlayerRecord> = response.json().await?;
        info!("Fetched {} Sleeper player records", records.len());

        Ok(Self::from_records(config, records.into_values()))
    }

    /// Build an oracle from already-fetched records (fixtures, tests)
    pub fn from_records(
        config: SleeperOracleConfig,
        records: impl IntoIterator<Item = SleeperPlayerRecord>,
    ) -> Self {
        let mut values = HashMap::new();
        for record in records {
            let (Some(name), Some(rank)) = (record.full_name, record.search_rank) else {
                continue;
            };
            if !record.active || rank == 0 || rank > config.rank_cutoff {
                continue;
            }
            values.insert(name, rank_value(&config, rank));
        }

        info!("Sleeper oracle holds values for {} players", values.len());
        Self { config, values }
    }

    /// Number of players with a usable value
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

/// Linear rank-to-value mapping: rank 1 is worth `top_value`, the cutoff
/// rank approaches zero
fn rank_value(config: &SleeperOracleConfig, rank: u32) -> f64 {
    let cutoff = config.rank_cutoff as f64;
    config.top_value * (cutoff - rank as f64 + 1.0) / cutoff
}

#[async_trait]
impl ValueOracle for SleeperOracle {
    async fn player_value(&self, player: &Player) -> anyhow::Result<f64> {
        let value = self
            .values
            .get(&player.name)
            .copied()
            .ok_or_else(|| SleeperOracleError::PlayerNotFound(player.name.clone()))
            .context("Sleeper lookup failed")?;

        debug!("Sleeper value for {}: {:.1}", player.name, value);
        Ok(value)
    }
}
