//! # T-Invest Client
//!
//! A market-data client for the T-Invest (Tinkoff Investments) REST API.
//!
//! ## Features
//!
//! - **Ticker resolution**: finds the FIGI of a ticker, preferring `BBG`
//!   identifiers over broker-issued `TCS` ones
//! - **Last price**: with a fallback to the top of the order book when the
//!   instrument has no trades
//! - **Daily candles** for `1d`, `2d` and `1w` windows, as a date-indexed
//!   [`presentation::candle::HistoricalSeries`]
//! - **Trading volume** of the latest session
//! - **Sandbox and live** environments, selected by configuration
//! - **Client-side rate limiting** with `governor`
//!
//! ## Configuration
//!
//! Settings come from the environment or a `.env` file:
//!
//! ```text
//! TINVEST_SANDBOX_MODE=true
//! TINVEST_TOKENS_DIR=Tokens
//! TINVEST_SANDBOX_TOKEN_FILE=sandbox_token.txt
//! TINVEST_REAL_TOKEN_FILE=real_token.txt
//! LOGLEVEL=INFO
//! ```
//!
//! The token file of the selected mode must exist and be non-empty.
//!
//! ## Usage
//!
//! ```ignore
//! use tinvest_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::connect(Config::new()).await?;
//!
//!     let price = client.get_current_price("SBER").await;
//!     let week = client.get_historical_data("SBER", "1w").await;
//!     println!("{price:?}\n{week}");
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! [`application::client::Client`] is generic over
//! [`application::interfaces::api::MarketDataApi`], so tests can run the
//! resolver against an in-memory fake instead of the network.

/// Configuration, token loading, the resolver and its interfaces
pub mod application;

/// Global constants
pub mod constants;

/// Error type
pub mod error;

/// Request/response models and the HTTP transport
pub mod model;

/// Domain values: quotations, instruments, candles
pub mod presentation;

/// Commonly used re-exports
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
