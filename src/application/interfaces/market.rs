use crate::presentation::candle::HistoricalSeries;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Outcome of a lookup that reached the API without a transport error
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The value exists
    Found(T),
    /// The API answered but had nothing for the request
    NotFound,
}

impl<T> Lookup<T> {
    /// `true` for [`Lookup::Found`]
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Drops the distinction into an `Option`
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

/// Generic market-data provider shape
///
/// None of these methods fail: a missing instrument and a failed request
/// both come back as `None` or an empty series. Use the `lookup_*` methods
/// on [`crate::application::client::Client`] to tell them apart.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Last price of a ticker or FIGI
    async fn get_current_price(&self, ticker: &str) -> Option<f64>;

    /// Daily candles for a period token (`"1d"`, `"2d"`, `"1w"`)
    async fn get_historical_data(&self, ticker: &str, period: &str) -> HistoricalSeries;

    /// Volume of the most recent daily candle
    ///
    /// `date` is accepted for interface compatibility; the lookup always uses
    /// the latest candle of a one-day window.
    async fn get_trading_volume(&self, ticker: &str, date: Option<NaiveDate>) -> Option<i64>;
}
