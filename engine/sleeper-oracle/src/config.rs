use serde::{Deserialize, Serialize};

/// Configuration for the Sleeper value oracle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleeperOracleConfig {
    /// Sleeper API base URL
    pub api_base_url: String,

    /// Sport slug in API paths (e.g., "nfl")
    pub sport: String,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,

    /// Deepest search rank still worth a value
    pub rank_cutoff: u32,

    /// Value assigned at search rank 1; deeper ranks scale down linearly
    pub top_value: f64,
}

impl Default for SleeperOracleConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.sleeper.app/v1".to_string(),
            sport: "nfl".to_string(),
            request_timeout_secs: 30,
            rank_cutoff: 200,
            top_value: 110.0,
        }
    }
}

impl SleeperOracleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("SLEEPER_API_BASE_URL") {
            config.api_base_url = base_url;
        }

        if let Ok(cutoff) = std::env::var("SLEEPER_RANK_CUTOFF") {
            config.rank_cutoff = cutoff.parse().unwrap_or(200);
        }

        if let Ok(timeout) = std::env::var("SLEEPER_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout.parse().unwrap_or(30);
        }

        Ok(config)
    }
}
