/// Candles, historical series and period tokens
pub mod candle;
/// Instrument references and FIGI classification
pub mod instrument;
/// Fixed-point price model
pub mod price;
/// Serialization utilities for API responses
pub mod serialization;

pub use candle::{Candle, HistoricalSeries, Period};
pub use instrument::{FigiSystem, InstrumentRef, pick_preferred_figi};
pub use price::Quotation;
