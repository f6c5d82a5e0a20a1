/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::CandleInterval;
use crate::model::responses::{
    AccountsResponse, CandlesResponse, FindInstrumentResponse, LastPricesResponse,
    OrderBookResponse,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Upstream calls the resolver relies on
///
/// Each method maps to exactly one request to the market-data system.
/// The production implementation is [`crate::model::http::HttpClient`];
/// tests substitute an in-memory fake.
#[async_trait]
pub trait MarketDataApi: Send + Sync {
    /// Free-text instrument search (`InstrumentsService/FindInstrument`)
    async fn find_instrument(&self, query: &str) -> Result<FindInstrumentResponse, AppError>;

    /// Last trade prices (`MarketDataService/GetLastPrices`)
    async fn get_last_prices(&self, figis: &[String]) -> Result<LastPricesResponse, AppError>;

    /// Order book snapshot (`MarketDataService/GetOrderBook`)
    async fn get_order_book(&self, figi: &str, depth: u32) -> Result<OrderBookResponse, AppError>;

    /// Candles in `[from, to)` (`MarketDataService/GetCandles`)
    async fn get_candles(
        &self,
        figi: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        interval: CandleInterval,
    ) -> Result<CandlesResponse, AppError>;

    /// Accounts visible to the token, used as a connectivity check
    async fn get_accounts(&self) -> Result<AccountsResponse, AppError>;
}
