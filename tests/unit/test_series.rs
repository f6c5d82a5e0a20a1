use chrono::NaiveDate;
use tinvest_client::prelude::*;

fn row(day: u32, close: f64, volume: i64) -> Candle {
    Candle {
        date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        open: close - 1.0,
        high: close + 1.0,
        low: close - 2.0,
        close,
        volume,
    }
}

#[test]
fn series_is_sorted_by_date() {
    let rows = vec![row(7, 3.0, 30), row(3, 1.0, 10), row(5, 2.0, 20)];
    let series = HistoricalSeries::from_candles(rows);
    let volumes: Vec<i64> = series.iter().map(|c| c.volume).collect();
    assert_eq!(volumes, vec![10, 20, 30]);
    assert_eq!(series.first().unwrap().volume, 10);
    assert_eq!(series.last().unwrap().volume, 30);
}

#[test]
fn equal_dates_keep_api_order() {
    let series: HistoricalSeries = vec![row(5, 2.0, 1), row(5, 2.5, 2)].into_iter().collect();
    let volumes: Vec<i64> = series.iter().map(|c| c.volume).collect();
    assert_eq!(volumes, vec![1, 2]);
}

#[test]
fn lookup_by_date_index() {
    let series = HistoricalSeries::from_candles(vec![row(3, 1.0, 10), row(5, 2.0, 20)]);
    let day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    assert_eq!(series.get(day).map(|c| c.volume), Some(20));
    let missing = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
    assert!(series.get(missing).is_none());
}

#[test]
fn empty_series() {
    let series = HistoricalSeries::empty();
    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert!(series.last().is_none());
    assert_eq!(series, HistoricalSeries::default());
}

#[test]
fn display_renders_a_table() {
    let series = HistoricalSeries::from_candles(vec![row(3, 100.5, 1234)]);
    let rendered = series.to_string();
    assert!(rendered.contains("Date"));
    assert!(rendered.contains("Volume"));
    assert!(rendered.contains("2025-03-03"));
    assert!(rendered.contains("100.50"));
    assert!(rendered.contains("1234"));
}

#[test]
fn owned_iteration_yields_rows_in_order() {
    let series = HistoricalSeries::from_candles(vec![row(4, 2.0, 2), row(2, 1.0, 1)]);
    let rows: Vec<Candle> = series.into_iter().collect();
    assert_eq!(rows[0].volume, 1);
    assert_eq!(rows[1].volume, 2);
}
