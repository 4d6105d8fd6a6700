use std::time::Duration;

use anyhow::{ensure, Context, Result};

use crate::providers::{
    coincap::DEFAULT_QUOTE_TIMEOUT, price_provider::DEFAULT_PRICE_TTL,
    rpc_provider::DEFAULT_RPC_TIMEOUT,
};

const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
const DEFAULT_PORT: u16 = 8080;

/// Upper bound for TTLs and timeouts (one year)
const MAX_DURATION_SECS: u64 = 365 * 24 * 60 * 60;

/// Service settings, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub port: u16,
    pub coincap_api_key: Option<String>,
    pub price_ttl: Duration,
    pub quote_timeout: Duration,
    pub rpc_timeout: Duration,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            port: DEFAULT_PORT,
            coincap_api_key: None,
            price_ttl: DEFAULT_PRICE_TTL,
            quote_timeout: DEFAULT_QUOTE_TIMEOUT,
            rpc_timeout: DEFAULT_RPC_TIMEOUT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from process environment variables, after applying `.env`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let secs = |key: &str, default: Duration| -> Result<Duration> {
            let Some(v) = var(key) else {
                return Ok(default);
            };
            let secs = v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{key} must be a whole number of seconds, got {v:?}"))?;
            ensure!(
                secs <= MAX_DURATION_SECS,
                "{key} must be at most {MAX_DURATION_SECS} seconds, got {secs}"
            );
            Ok(Duration::from_secs(secs))
        };

        let port = match var("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {v:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            rpc_url: var("SOLANA_RPC_URL").unwrap_or(defaults.rpc_url),
            port,
            coincap_api_key: var("COINCAP_API_KEY"),
            price_ttl: secs("PRICE_CACHE_TTL_SECS", defaults.price_ttl)?,
            quote_timeout: secs("QUOTE_TIMEOUT_SECS", defaults.quote_timeout)?,
            rpc_timeout: secs("RPC_TIMEOUT_SECS", defaults.rpc_timeout)?,
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Socket address the HTTP server binds to
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
