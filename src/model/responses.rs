/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::price::Quotation;
use crate::presentation::serialization::string_or_i64;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Short description of an instrument returned by a search
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct InstrumentShort {
    /// ISIN code
    #[serde(default)]
    pub isin: String,
    /// FIGI identifier
    #[serde(default)]
    pub figi: String,
    /// Exchange ticker
    #[serde(default)]
    pub ticker: String,
    /// Trading mode (board) code
    #[serde(rename = "classCode", default)]
    pub class_code: String,
    /// Instrument type, e.g. `share` or `bond`
    #[serde(rename = "instrumentType", default)]
    pub instrument_type: String,
    /// Human readable name
    #[serde(default)]
    pub name: String,
    /// Broker internal unique id
    #[serde(default)]
    pub uid: String,
    /// Whether the instrument can be traded through the API
    #[serde(rename = "apiTradeAvailableFlag", default)]
    pub api_trade_available_flag: bool,
}

/// Response of `InstrumentsService/FindInstrument`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct FindInstrumentResponse {
    /// Matching instruments in relevance order
    #[serde(default)]
    pub instruments: Vec<InstrumentShort>,
}

/// Last trade price of one instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LastPrice {
    /// Instrument FIGI
    #[serde(default)]
    pub figi: String,
    /// Last trade price; zero when there were no trades
    #[serde(default)]
    pub price: Option<Quotation>,
    /// Time of the last trade
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    /// Broker internal unique id
    #[serde(rename = "instrumentUid", default)]
    pub instrument_uid: Option<String>,
}

/// Response of `MarketDataService/GetLastPrices`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LastPricesResponse {
    /// One entry per requested instrument
    #[serde(rename = "lastPrices", default)]
    pub last_prices: Vec<LastPrice>,
}

/// A single price level of the order book
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderBookLevel {
    /// Price of the level
    #[serde(default)]
    pub price: Quotation,
    /// Quantity in lots
    #[serde(default, deserialize_with = "string_or_i64")]
    pub quantity: i64,
}

/// Response of `MarketDataService/GetOrderBook`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderBookResponse {
    /// Instrument FIGI
    #[serde(default)]
    pub figi: String,
    /// Depth of the book
    #[serde(default)]
    pub depth: u32,
    /// Buy side, best first
    #[serde(default)]
    pub bids: Vec<OrderBookLevel>,
    /// Sell side, best first
    #[serde(default)]
    pub asks: Vec<OrderBookLevel>,
    /// Last trade price
    #[serde(rename = "lastPrice", default)]
    pub last_price: Option<Quotation>,
    /// Previous session close price
    #[serde(rename = "closePrice", default)]
    pub close_price: Option<Quotation>,
}

/// A historical candle as returned by the API
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct HistoricCandle {
    /// Opening price
    #[serde(default)]
    pub open: Quotation,
    /// Highest price
    #[serde(default)]
    pub high: Quotation,
    /// Lowest price
    #[serde(default)]
    pub low: Quotation,
    /// Closing price
    #[serde(default)]
    pub close: Quotation,
    /// Traded volume in lots
    #[serde(default, deserialize_with = "string_or_i64")]
    pub volume: i64,
    /// Candle open time
    pub time: DateTime<Utc>,
    /// Whether the candle is closed
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
}

/// Response of `MarketDataService/GetCandles`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CandlesResponse {
    /// Candles in chronological order
    #[serde(default)]
    pub candles: Vec<HistoricCandle>,
}

/// Brokerage account visible to the token
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Account {
    /// Account id
    #[serde(default)]
    pub id: String,
    /// Account name
    #[serde(default)]
    pub name: String,
    /// Account type
    #[serde(rename = "type", default)]
    pub account_type: String,
    /// Account status
    #[serde(default)]
    pub status: String,
}

/// Response of the account listing methods
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountsResponse {
    /// Accounts of the token owner
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// Error body returned by the gateway on failure
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiErrorBody {
    /// gRPC status code
    #[serde(default)]
    pub code: i32,
    /// Error message
    #[serde(default)]
    pub message: String,
    /// Numeric API error code as text
    #[serde(default)]
    pub description: String,
}
