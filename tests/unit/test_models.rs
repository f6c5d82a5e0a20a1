use assert_json_diff::assert_json_eq;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;
use tinvest_client::model::requests::{
    FindInstrumentRequest, GetCandlesRequest, GetLastPricesRequest, GetOrderBookRequest,
};
use tinvest_client::prelude::*;

#[test]
fn quotation_accepts_string_units() {
    let q: Quotation = serde_json::from_str(r#"{"units": "100", "nano": 500000000}"#).unwrap();
    assert_eq!(q, Quotation::new(100, 500_000_000));
    assert_eq!(q.to_f64(), 100.50);
}

#[test]
fn quotation_accepts_numeric_units_and_string_nano() {
    let q: Quotation = serde_json::from_str(r#"{"units": 42, "nano": "10000000"}"#).unwrap();
    assert_eq!(q, Quotation::new(42, 10_000_000));
}

#[test]
fn quotation_missing_fields_are_zero() {
    let q: Quotation = serde_json::from_str("{}").unwrap();
    assert!(q.is_zero());
}

#[test]
fn quotation_rejects_garbage_units() {
    assert!(serde_json::from_str::<Quotation>(r#"{"units": "abc", "nano": 0}"#).is_err());
}

#[test]
fn quotation_serializes_units_as_string() {
    let value = serde_json::to_value(Quotation::new(-5, -1)).unwrap();
    assert_json_eq!(value, json!({"units": "-5", "nano": -1}));
}

#[test]
fn candle_response_parses_gateway_json() {
    let body = r#"{
        "candles": [{
            "open": {"units": "270", "nano": 100000000},
            "high": {"units": "275", "nano": 0},
            "low": {"units": "268", "nano": 990000000},
            "close": {"units": "273", "nano": 450000000},
            "volume": "1500321",
            "time": "2025-03-07T07:00:00Z",
            "isComplete": true
        }]
    }"#;
    let response: CandlesResponse = serde_json::from_str(body).unwrap();
    let candle = Candle::from(&response.candles[0]);

    assert_eq!(candle.date, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
    assert_eq!(candle.open, 270.10);
    assert_eq!(candle.high, 275.0);
    assert_eq!(candle.low, 268.99);
    assert_eq!(candle.close, 273.45);
    assert_eq!(candle.volume, 1_500_321);
}

#[test]
fn order_book_response_parses_levels() {
    let body = r#"{
        "figi": "BBG004730N88",
        "depth": 1,
        "bids": [{"price": {"units": "250", "nano": 10000000}, "quantity": "12"}],
        "asks": []
    }"#;
    let book: OrderBookResponse = serde_json::from_str(body).unwrap();
    assert_eq!(book.bids.len(), 1);
    assert_eq!(book.bids[0].quantity, 12);
    assert_eq!(book.bids[0].price.to_f64(), 250.01);
    assert!(book.asks.is_empty());
    assert!(book.last_price.is_none());
}

#[test]
fn find_instrument_request_omits_unset_filters() {
    let value = serde_json::to_value(FindInstrumentRequest::new("SBER")).unwrap();
    assert_json_eq!(value, json!({"query": "SBER"}));
}

#[test]
fn market_data_request_shapes() {
    let last = GetLastPricesRequest {
        figi: vec!["BBG004730N88".to_string()],
    };
    assert_json_eq!(
        serde_json::to_value(last).unwrap(),
        json!({"figi": ["BBG004730N88"]})
    );

    let book = GetOrderBookRequest {
        figi: "BBG004730N88".to_string(),
        depth: 1,
    };
    assert_json_eq!(
        serde_json::to_value(book).unwrap(),
        json!({"figi": "BBG004730N88", "depth": 1})
    );

    let candles = GetCandlesRequest {
        figi: "BBG004730N88".to_string(),
        from: Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap(),
        to: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
        interval: CandleInterval::Day,
    };
    assert_json_eq!(
        serde_json::to_value(candles).unwrap(),
        json!({
            "figi": "BBG004730N88",
            "from": "2025-03-02T12:00:00Z",
            "to": "2025-03-10T12:00:00Z",
            "interval": "CANDLE_INTERVAL_DAY"
        })
    );
}

#[test]
fn instrument_ref_classifies_by_prefix() {
    assert_eq!(
        InstrumentRef::parse("BBG004730N88"),
        InstrumentRef::Figi("BBG004730N88".to_string())
    );
    assert!(InstrumentRef::parse("TCS00A106YF0").is_figi());
    assert!(!InstrumentRef::parse("SBER").is_figi());
    // prefixes are case-sensitive
    assert!(!InstrumentRef::parse("bbg004730N88").is_figi());
    assert_eq!(InstrumentRef::from("SBER").to_string(), "SBER");
}

#[test]
fn figi_system_prefixes() {
    assert_eq!(FigiSystem::of("BBG000B9XRY4"), Some(FigiSystem::Bbg));
    assert_eq!(FigiSystem::of("TCS00A106YF0"), Some(FigiSystem::Tcs));
    assert_eq!(FigiSystem::of("US0378331005"), None);
    assert_eq!(FigiSystem::Bbg.prefix(), "BBG");
}
