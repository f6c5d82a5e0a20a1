/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::HistoricCandle;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use pretty_simple_display::DisplaySimple;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Look-back window of a historical data request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Period {
    /// One day (`"1d"`)
    #[default]
    Day,
    /// Two days (`"2d"`)
    TwoDays,
    /// One week (`"1w"`)
    Week,
}

impl Period {
    /// Parses a period token; unknown tokens fall back to one day
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "1d" => Period::Day,
            "2d" => Period::TwoDays,
            "1w" => Period::Week,
            _ => Period::Day,
        }
    }

    /// Number of calendar days covered by the period
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Period::Day => 1,
            Period::TwoDays => 2,
            Period::Week => 7,
        }
    }

    /// Request window ending at `now`
    ///
    /// The window starts one extra day back so the previous session's candle
    /// is included even when the current one has not opened yet.
    #[must_use]
    pub fn range_ending(self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (now - Duration::days(self.days() + 1), now)
    }
}

impl From<&str> for Period {
    fn from(token: &str) -> Self {
        Period::parse(token)
    }
}

/// One daily candle with prices converted to floats
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    /// Trading day (UTC date of the candle open time)
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume in lots
    pub volume: i64,
}

impl From<&HistoricCandle> for Candle {
    fn from(candle: &HistoricCandle) -> Self {
        Self {
            date: candle.time.date_naive(),
            open: candle.open.to_f64(),
            high: candle.high.to_f64(),
            low: candle.low.to_f64(),
            close: candle.close.to_f64(),
            volume: candle.volume,
        }
    }
}

impl From<HistoricCandle> for Candle {
    fn from(candle: HistoricCandle) -> Self {
        Candle::from(&candle)
    }
}

/// Date-ordered series of daily candles
///
/// Rows are sorted ascending by date. Sorting is stable, so rows sharing a
/// date keep the order the API returned them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HistoricalSeries {
    candles: Vec<Candle>,
}

impl HistoricalSeries {
    /// An empty series
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a series, sorting the candles by date
    #[must_use]
    pub fn from_candles(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.date);
        Self { candles }
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// `true` when the series has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Oldest row
    #[must_use]
    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    /// Most recent row
    #[must_use]
    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Looks a row up by its date index
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&Candle> {
        let idx = self.candles.partition_point(|c| c.date < date);
        self.candles.get(idx).filter(|c| c.date == date)
    }

    /// Dates of all rows, ascending
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.candles.iter().map(|c| c.date)
    }

    /// Iterates rows in date order
    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }

    /// Rows as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Candle] {
        &self.candles
    }
}

impl IntoIterator for HistoricalSeries {
    type Item = Candle;
    type IntoIter = std::vec::IntoIter<Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.into_iter()
    }
}

impl<'a> IntoIterator for &'a HistoricalSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}

impl FromIterator<Candle> for HistoricalSeries {
    fn from_iter<I: IntoIterator<Item = Candle>>(iter: I) -> Self {
        HistoricalSeries::from_candles(iter.into_iter().collect())
    }
}

impl fmt::Display for HistoricalSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_titles(Row::new(
            ["Date", "Open", "High", "Low", "Close", "Volume"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));
        for c in &self.candles {
            table.add_row(Row::new(vec![
                Cell::new(&c.date.to_string()),
                Cell::new(&format!("{:.2}", c.open)),
                Cell::new(&format!("{:.2}", c.high)),
                Cell::new(&format!("{:.2}", c.low)),
                Cell::new(&format!("{:.2}", c.close)),
                Cell::new(&c.volume.to_string()),
            ]));
        }
        write!(f, "{table}")
    }
}
