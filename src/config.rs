//! Runtime settings: service endpoints and transport policy.
//!
//! Everything has a default, so the program runs without a config file.
//! A JSON file can override any subset of fields.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_LOCATION_URL: &str = "https://ipinfo.io/json";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// IP geolocation endpoint returning `{"loc": "<lat>,<lon>"}`
    pub location_url: String,
    /// Open-Meteo forecast endpoint
    pub forecast_url: String,
    pub forecast_days: u8,
    pub transport: TransportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub cache_ttl_secs: u64,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// First retry delay; each following delay doubles
    pub backoff_factor_secs: f64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            location_url: DEFAULT_LOCATION_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            forecast_days: 7,
            transport: TransportConfig::default(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 3600,
            max_retries: 5,
            backoff_factor_secs: 0.2,
            user_agent: format!("wx-now/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Load settings from `path` over the defaults, or the defaults alone.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                serde_json::from_str::<AppConfig>(&raw)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => AppConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.location_url.trim().is_empty() {
            bail!("location_url must not be empty");
        }
        if self.forecast_url.trim().is_empty() {
            bail!("forecast_url must not be empty");
        }
        if !(1..=16).contains(&self.forecast_days) {
            bail!(
                "forecast_days must be between 1 and 16, got {}",
                self.forecast_days
            );
        }
        let backoff = self.transport.backoff_factor_secs;
        if !backoff.is_finite() || backoff < 0.0 {
            bail!("backoff_factor_secs must be a non-negative number, got {backoff}");
        }
        Ok(())
    }
}

impl TransportConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Shortest and longest delay between attempts.
    pub fn backoff_bounds(&self) -> (Duration, Duration) {
        let factor = Duration::try_from_secs_f64(self.backoff_factor_secs).unwrap_or(Duration::ZERO);
        let doublings = self.max_retries.saturating_sub(1).min(16);
        (factor, factor.saturating_mul(1 << doublings))
    }
}
