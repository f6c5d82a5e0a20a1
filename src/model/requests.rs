/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body of `InstrumentsService/FindInstrument`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct FindInstrumentRequest {
    /// Free-text query (ticker, FIGI, ISIN or name)
    pub query: String,
    /// Restrict results to one instrument kind
    #[serde(rename = "instrumentKind", skip_serializing_if = "Option::is_none")]
    pub instrument_kind: Option<String>,
    /// Only instruments tradable through the API
    #[serde(
        rename = "apiTradeAvailableFlag",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_trade_available_flag: Option<bool>,
}

impl FindInstrumentRequest {
    /// Search without filters
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            instrument_kind: None,
            api_trade_available_flag: None,
        }
    }
}

/// Body of `MarketDataService/GetLastPrices`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GetLastPricesRequest {
    /// FIGIs to quote
    pub figi: Vec<String>,
}

/// Body of `MarketDataService/GetOrderBook`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GetOrderBookRequest {
    /// Instrument FIGI
    pub figi: String,
    /// Number of price levels per side
    pub depth: u32,
}

/// Candle bucket size
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CandleInterval {
    /// One minute
    #[serde(rename = "CANDLE_INTERVAL_1_MIN")]
    OneMinute,
    /// Five minutes
    #[serde(rename = "CANDLE_INTERVAL_5_MIN")]
    FiveMinutes,
    /// Fifteen minutes
    #[serde(rename = "CANDLE_INTERVAL_15_MIN")]
    FifteenMinutes,
    /// One hour
    #[serde(rename = "CANDLE_INTERVAL_HOUR")]
    Hour,
    /// One trading day
    #[serde(rename = "CANDLE_INTERVAL_DAY")]
    #[default]
    Day,
}

/// Body of `MarketDataService/GetCandles`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GetCandlesRequest {
    /// Instrument FIGI
    pub figi: String,
    /// Start of the window (inclusive)
    pub from: DateTime<Utc>,
    /// End of the window (exclusive)
    pub to: DateTime<Utc>,
    /// Candle size
    pub interval: CandleInterval,
}

/// Empty body used by the account listing methods
#[derive(Debug, Clone, Copy, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GetAccountsRequest {}
