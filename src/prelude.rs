/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # T-Invest Client Prelude
//!
//! Brings the commonly used types into scope with a single import.
//!
//! ```rust,ignore
//! use tinvest_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{
    Config, RateLimiterConfig, RestApiConfig, TokenConfig, TradingConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND INTERFACES
// ============================================================================

/// Access token
pub use crate::application::auth::AccessToken;

/// Market data resolver
pub use crate::application::client::Client;

/// Upstream API trait
pub use crate::application::interfaces::api::MarketDataApi;

/// Provider trait and tagged lookup result
pub use crate::application::interfaces::market::{Lookup, MarketDataProvider};

/// REST transport
pub use crate::model::http::HttpClient;

/// Rate limiter
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// MODELS
// ============================================================================

/// Domain values
pub use crate::presentation::{
    Candle, FigiSystem, HistoricalSeries, InstrumentRef, Period, Quotation,
};

/// Wire models
pub use crate::model::requests::CandleInterval;
pub use crate::model::responses::{
    Account, AccountsResponse, CandlesResponse, FindInstrumentResponse, HistoricCandle,
    InstrumentShort, LastPrice, LastPricesResponse, OrderBookLevel, OrderBookResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, NaiveDate, Utc};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
