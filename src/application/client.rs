/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Market data resolver
//!
//! Turns a ticker or FIGI into prices, daily candles and volumes:
//! - tickers are resolved to a FIGI through instrument search, preferring
//!   `BBG` identifiers over `TCS` ones
//! - a zero last price falls back to the top of the order book
//! - vendor fixed-point prices are converted to `f64`
//!
//! Two flavours of every operation exist. `lookup_*` methods return
//! `Result<Lookup<T>, AppError>` and keep "not found" apart from "request
//! failed". The `get_*` methods collapse both into `None` or an empty
//! series and log the failure.
//!
//! # Example
//! ```ignore
//! use tinvest_client::prelude::*;
//!
//! let client = Client::connect(Config::new()).await?;
//! if let Some(price) = client.get_current_price("SBER").await {
//!     info!("SBER: {price}");
//! }
//! ```

use crate::application::auth::AccessToken;
use crate::application::config::Config;
use crate::application::interfaces::api::MarketDataApi;
use crate::application::interfaces::market::{Lookup, MarketDataProvider};
use crate::constants::{ORDER_BOOK_FALLBACK_DEPTH, VOLUME_PERIOD};
use crate::error::{AppError, AppResult};
use crate::model::http::HttpClient;
use crate::model::requests::CandleInterval;
use crate::presentation::candle::{Candle, HistoricalSeries, Period};
use crate::presentation::instrument::{InstrumentRef, pick_preferred_figi};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Market data client over any [`MarketDataApi`]
pub struct Client<A: MarketDataApi = HttpClient> {
    config: Arc<Config>,
    api: Arc<A>,
}

impl Client<HttpClient> {
    /// Creates a client talking to the REST gateway
    ///
    /// Fails with [`AppError::Config`] when the token file for the configured
    /// mode is missing or empty.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let token = AccessToken::load(&config)?;
        info!(
            "Initializing client (mode: {}, token: {})",
            config.mode_name(),
            token
        );
        let api = HttpClient::new(&config, token)?;
        Ok(Self::with_api(config, api))
    }

    /// Creates a client and checks the connection
    ///
    /// A failed connection check is logged and does not prevent construction; only token
    /// errors do.
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        match client.check_connection().await {
            Ok(count) => info!(
                "Connected to {} API, {} account(s) found",
                client.config.mode_name(),
                count
            ),
            Err(e) => error!(
                "Failed to connect to {} API: {}. Check the token and network",
                client.config.mode_name(),
                e
            ),
        }
        Ok(client)
    }
}

impl<A: MarketDataApi> Client<A> {
    /// Creates a client over an explicit transport
    pub fn with_api(config: Config, api: A) -> Self {
        Self::from_shared(Arc::new(config), Arc::new(api))
    }

    /// Creates a client from shared configuration and transport
    pub fn from_shared(config: Arc<Config>, api: Arc<A>) -> Self {
        Self { config, api }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying transport
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Lists the accounts of the token and returns how many there are
    pub async fn check_connection(&self) -> AppResult<usize> {
        let response = self.api.get_accounts().await?;
        Ok(response.accounts.len())
    }

    /// Resolves a ticker to a FIGI, keeping request failures apart
    pub async fn lookup_figi(&self, ticker: &str) -> AppResult<Lookup<String>> {
        if ticker.trim().is_empty() {
            return Err(AppError::InvalidInput("empty ticker".to_string()));
        }
        info!("Searching instrument by ticker: {}", ticker);
        let response = self.api.find_instrument(ticker).await?;
        debug!("Instruments found: {}", response.instruments.len());
        for instrument in &response.instruments {
            debug!(
                "  - {} | {} | {}",
                instrument.ticker, instrument.name, instrument.figi
            );
        }

        match pick_preferred_figi(&response.instruments, ticker) {
            Some(figi) => {
                info!("Resolved {} to {}", ticker, figi);
                Ok(Lookup::Found(figi.to_string()))
            }
            None => {
                info!("No exact ticker match for {}", ticker);
                Ok(Lookup::NotFound)
            }
        }
    }

    /// Resolves a ticker to a FIGI; failures are logged and yield `None`
    pub async fn figi_by_ticker(&self, ticker: &str) -> Option<String> {
        collapse(
            &format!("FIGI lookup for {ticker}"),
            self.lookup_figi(ticker).await,
        )
    }

    /// FIGI inputs pass through; tickers go through [`Self::lookup_figi`]
    async fn resolve(&self, figi_or_ticker: &str) -> AppResult<Lookup<String>> {
        match InstrumentRef::parse(figi_or_ticker) {
            InstrumentRef::Figi(figi) => Ok(Lookup::Found(figi)),
            InstrumentRef::Ticker(ticker) => self.lookup_figi(&ticker).await,
        }
    }

    /// Last price of a ticker or FIGI, falling back to the order book on a
    /// zero price
    pub async fn lookup_current_price(&self, figi_or_ticker: &str) -> AppResult<Lookup<f64>> {
        info!("Looking up price for: {}", figi_or_ticker);
        let figi = match self.resolve(figi_or_ticker).await? {
            Lookup::Found(figi) => figi,
            Lookup::NotFound => {
                warn!("FIGI not found for ticker: {}", figi_or_ticker);
                return Ok(Lookup::NotFound);
            }
        };

        let response = self.api.get_last_prices(&[figi.clone()]).await?;
        let Some(price) = response.last_prices.first().and_then(|p| p.price) else {
            warn!("Empty last price response for {}", figi);
            return Ok(Lookup::NotFound);
        };
        debug!("Raw last price for {}: {}", figi, price);

        if price.is_zero() {
            warn!("Zero last price for {}, trying the order book", figi);
            return self.lookup_order_book_price(&figi).await;
        }

        let result = price.to_f64();
        info!("Price for {}: {}", figi_or_ticker, result);
        Ok(Lookup::Found(result))
    }

    /// Best bid of a one-level order book, else best ask
    pub async fn lookup_order_book_price(&self, figi: &str) -> AppResult<Lookup<f64>> {
        let book = self
            .api
            .get_order_book(figi, ORDER_BOOK_FALLBACK_DEPTH)
            .await?;

        if let Some(bid) = book.bids.first() {
            let price = bid.price.to_f64();
            info!("Order book price for {} (bid): {}", figi, price);
            return Ok(Lookup::Found(price));
        }
        if let Some(ask) = book.asks.first() {
            let price = ask.price.to_f64();
            info!("Order book price for {} (ask): {}", figi, price);
            return Ok(Lookup::Found(price));
        }

        warn!("Order book for {} is empty", figi);
        Ok(Lookup::NotFound)
    }

    /// Order book fallback price; failures are logged and yield `None`
    pub async fn price_from_order_book(&self, figi: &str) -> Option<f64> {
        collapse(
            &format!("order book lookup for {figi}"),
            self.lookup_order_book_price(figi).await,
        )
    }

    /// Daily candles of a ticker or FIGI over a period token
    ///
    /// A resolved instrument always yields `Found`, possibly with an empty
    /// series when the API has no candles for the window.
    pub async fn lookup_historical_data(
        &self,
        figi_or_ticker: &str,
        period: &str,
    ) -> AppResult<Lookup<HistoricalSeries>> {
        let figi = match self.resolve(figi_or_ticker).await? {
            Lookup::Found(figi) => figi,
            Lookup::NotFound => {
                warn!("FIGI not found for ticker: {}", figi_or_ticker);
                return Ok(Lookup::NotFound);
            }
        };

        let (from, to) = Period::parse(period).range_ending(Utc::now());
        debug!(
            "Requesting daily candles for {} from {} to {}",
            figi, from, to
        );

        let response = self
            .api
            .get_candles(&figi, from, to, CandleInterval::Day)
            .await?;

        let series: HistoricalSeries = response.candles.iter().map(Candle::from).collect();
        debug!("{} candles received for {}", series.len(), figi);
        Ok(Lookup::Found(series))
    }

    /// Last price; `None` when unresolved, empty or failed
    pub async fn get_current_price(&self, figi_or_ticker: &str) -> Option<f64> {
        collapse(
            &format!("price lookup for {figi_or_ticker}"),
            self.lookup_current_price(figi_or_ticker).await,
        )
    }

    /// Daily candles; empty when unresolved, empty or failed
    pub async fn get_historical_data(
        &self,
        figi_or_ticker: &str,
        period: &str,
    ) -> HistoricalSeries {
        collapse(
            &format!("historical data for {figi_or_ticker}"),
            self.lookup_historical_data(figi_or_ticker, period).await,
        )
        .unwrap_or_default()
    }

    /// Volume of the most recent candle in a one-day window
    ///
    /// `date` is only logged; it does not select the day.
    pub async fn get_trading_volume(
        &self,
        figi_or_ticker: &str,
        date: Option<NaiveDate>,
    ) -> Option<i64> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        debug!(
            "Trading volume for {} (requested date {})",
            figi_or_ticker, date
        );

        let series = self
            .get_historical_data(figi_or_ticker, VOLUME_PERIOD)
            .await;
        series.last().map(|candle| candle.volume)
    }
}

#[async_trait]
impl<A: MarketDataApi + 'static> MarketDataProvider for Client<A> {
    async fn get_current_price(&self, ticker: &str) -> Option<f64> {
        Client::get_current_price(self, ticker).await
    }

    async fn get_historical_data(&self, ticker: &str, period: &str) -> HistoricalSeries {
        Client::get_historical_data(self, ticker, period).await
    }

    async fn get_trading_volume(&self, ticker: &str, date: Option<NaiveDate>) -> Option<i64> {
        Client::get_trading_volume(self, ticker, date).await
    }
}

impl<A: MarketDataApi> Clone for Client<A> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            api: self.api.clone(),
        }
    }
}

/// Collapses a tagged lookup into an `Option`, logging request failures
fn collapse<T>(context: &str, result: AppResult<Lookup<T>>) -> Option<T> {
    match result {
        Ok(lookup) => lookup.into_option(),
        Err(e) => {
            error!("Error in {}: {}", context, e);
            None
        }
    }
}
