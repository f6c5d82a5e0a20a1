use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_BASELINE_CAPITAL, DEFAULT_CURRENCY, DEFAULT_MARKET_TIMEZONE,
    DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_REAL_TOKEN_FILE, DEFAULT_REST_BASE_URL,
    DEFAULT_REST_TIMEOUT, DEFAULT_SANDBOX_REST_BASE_URL, DEFAULT_SANDBOX_TOKEN_FILE,
    DEFAULT_TOKENS_DIR, DEFAULT_TRADING_END, DEFAULT_TRADING_START, MARKET_INDICES,
};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default};
use chrono::NaiveTime;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Location of the access token files
pub struct TokenConfig {
    /// Directory holding the token files
    pub dir: PathBuf,
    /// File name of the sandbox token
    pub sandbox_file: String,
    /// File name of the live trading token
    pub real_file: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST gateway
pub struct RestApiConfig {
    /// Base URL of the live gateway
    pub base_url: String,
    /// Base URL of the sandbox gateway
    pub sandbox_base_url: String,
    /// Timeout in seconds for each request
    pub timeout: u64,
    /// Application name sent in the `x-app-name` header
    pub app_name: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Market settings used by callers of the client
pub struct TradingConfig {
    /// Account currency code
    pub currency: String,
    /// Baseline capital in account currency
    pub baseline_capital: f64,
    /// IANA name of the market timezone
    pub market_timezone: String,
    /// Main session opening time, `HH:MM` market time
    pub session_start: String,
    /// Main session closing time, `HH:MM` market time
    pub session_end: String,
}

impl TradingConfig {
    /// Parses the session bounds
    pub fn session_hours(&self) -> Result<(NaiveTime, NaiveTime), AppError> {
        let parse = |value: &str| {
            NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| {
                AppError::Config(format!("invalid session time '{value}': {e}"))
            })
        };
        Ok((parse(&self.session_start)?, parse(&self.session_end)?))
    }

    /// Whether `time` (market time) falls inside the main session, bounds included
    pub fn is_session_open(&self, time: NaiveTime) -> Result<bool, AppError> {
        let (start, end) = self.session_hours()?;
        Ok(start <= time && time <= end)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the T-Invest client
pub struct Config {
    /// Use the sandbox environment instead of live trading
    pub sandbox_mode: bool,
    /// Token file locations
    pub tokens: TokenConfig,
    /// REST gateway configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration
    pub rate_limiter: RateLimiterConfig,
    /// Market settings
    pub trading: TradingConfig,
    /// Market index names and their FIGIs
    pub indices: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            sandbox_mode: get_env_flag("TINVEST_SANDBOX_MODE", true),
            tokens: TokenConfig {
                dir: PathBuf::from(get_env_or_default(
                    "TINVEST_TOKENS_DIR",
                    String::from(DEFAULT_TOKENS_DIR),
                )),
                sandbox_file: get_env_or_default(
                    "TINVEST_SANDBOX_TOKEN_FILE",
                    String::from(DEFAULT_SANDBOX_TOKEN_FILE),
                ),
                real_file: get_env_or_default(
                    "TINVEST_REAL_TOKEN_FILE",
                    String::from(DEFAULT_REAL_TOKEN_FILE),
                ),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "TINVEST_REST_BASE_URL",
                    String::from(DEFAULT_REST_BASE_URL),
                ),
                sandbox_base_url: get_env_or_default(
                    "TINVEST_SANDBOX_REST_BASE_URL",
                    String::from(DEFAULT_SANDBOX_REST_BASE_URL),
                ),
                timeout: get_env_or_default("TINVEST_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
                app_name: get_env_or_default("TINVEST_APP_NAME", String::from(DEFAULT_APP_NAME)),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "TINVEST_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "TINVEST_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "TINVEST_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            trading: TradingConfig {
                currency: get_env_or_default("TINVEST_CURRENCY", String::from(DEFAULT_CURRENCY)),
                baseline_capital: get_env_or_default(
                    "TINVEST_BASELINE_CAPITAL",
                    DEFAULT_BASELINE_CAPITAL,
                ),
                market_timezone: get_env_or_default(
                    "TINVEST_MARKET_TIMEZONE",
                    String::from(DEFAULT_MARKET_TIMEZONE),
                ),
                session_start: get_env_or_default(
                    "TINVEST_TRADING_START",
                    String::from(DEFAULT_TRADING_START),
                ),
                session_end: get_env_or_default(
                    "TINVEST_TRADING_END",
                    String::from(DEFAULT_TRADING_END),
                ),
            },
            indices: MARKET_INDICES
                .iter()
                .map(|(name, figi)| (name.to_string(), figi.to_string()))
                .collect(),
        }
    }

    /// Base URL of the gateway for the current mode
    #[must_use]
    pub fn active_base_url(&self) -> &str {
        if self.sandbox_mode {
            &self.rest_api.sandbox_base_url
        } else {
            &self.rest_api.base_url
        }
    }

    /// Path of the token file for the current mode
    #[must_use]
    pub fn token_path(&self) -> PathBuf {
        let file = if self.sandbox_mode {
            &self.tokens.sandbox_file
        } else {
            &self.tokens.real_file
        };
        self.tokens.dir.join(file)
    }

    /// Human readable mode name
    #[must_use]
    pub fn mode_name(&self) -> &'static str {
        if self.sandbox_mode { "sandbox" } else { "live" }
    }

    /// FIGI of a market index, e.g. `IMOEX`
    #[must_use]
    pub fn index_figi(&self, name: &str) -> Option<&str> {
        self.indices.get(&name.to_uppercase()).map(String::as_str)
    }
}
