use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use tinvest_client::model::http::error_from_status;
use tinvest_client::prelude::*;

const TOKEN: &str = "t.test-token-0123456789";
const PREFIX: &str = "/tinkoff.public.invest.api.contract.v1";

fn http_client(base_url: &str, sandbox: bool) -> HttpClient {
    let mut config = Config::new();
    config.sandbox_mode = sandbox;
    config.rest_api.sandbox_base_url = base_url.to_string();
    config.rest_api.base_url = base_url.to_string();
    config.rest_api.app_name = "tests".to_string();
    HttpClient::new(&config, AccessToken::new(TOKEN).unwrap()).unwrap()
}

fn sandbox_config(base_url: &str, token_dir: &Path) -> Config {
    let mut config = Config::new();
    config.sandbox_mode = true;
    config.rest_api.sandbox_base_url = base_url.to_string();
    config.tokens.dir = token_dir.to_path_buf();
    config.tokens.sandbox_file = "sandbox_token.txt".to_string();
    config
}

fn path(method: &str) -> String {
    format!("{PREFIX}.{method}")
}

#[tokio::test]
async fn find_instrument_posts_query_with_bearer_token() {
    let body = r#"{"instruments": [
        {"figi": "TCS0000001", "ticker": "SBER", "name": "Sber TCS"},
        {"figi": "BBG004730N88", "ticker": "SBER", "name": "Sberbank", "classCode": "TQBR"}
    ]}"#;
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("InstrumentsService/FindInstrument").as_str())
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_header("x-app-name", "tests")
        .match_body(Matcher::Json(json!({"query": "SBER"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let api = http_client(&server.url(), true);
    let response = api.find_instrument("SBER").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.instruments.len(), 2);
    assert_eq!(response.instruments[1].class_code, "TQBR");
}

#[tokio::test]
async fn last_prices_parse_string_units() {
    let body = r#"{"lastPrices": [{
        "figi": "BBG004730N88",
        "price": {"units": "312", "nano": 730000000},
        "time": "2025-03-07T15:39:59.123Z"
    }]}"#;
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("MarketDataService/GetLastPrices").as_str())
        .match_body(Matcher::Json(json!({"figi": ["BBG004730N88"]})))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let api = http_client(&server.url(), true);
    let response = api
        .get_last_prices(&["BBG004730N88".to_string()])
        .await
        .unwrap();

    mock.assert_async().await;
    let price = response.last_prices[0].price.unwrap();
    assert_eq!(price.to_f64(), 312.73);
}

#[tokio::test]
async fn order_book_and_candles_requests() {
    let book_body = r#"{
        "figi": "BBG004730N88",
        "depth": 1,
        "bids": [],
        "asks": [{"price": {"units": "10"}, "quantity": "3"}]
    }"#;
    let mut server = Server::new_async().await;
    let book = server
        .mock("POST", path("MarketDataService/GetOrderBook").as_str())
        .match_body(Matcher::Json(json!({"figi": "BBG004730N88", "depth": 1})))
        .with_status(200)
        .with_body(book_body)
        .create_async()
        .await;
    let candles = server
        .mock("POST", path("MarketDataService/GetCandles").as_str())
        .match_body(Matcher::PartialJson(json!({
            "figi": "BBG004730N88",
            "interval": "CANDLE_INTERVAL_DAY"
        })))
        .with_status(200)
        .with_body(r#"{"candles": []}"#)
        .create_async()
        .await;

    let api = http_client(&server.url(), true);
    let response = api.get_order_book("BBG004730N88", 1).await.unwrap();
    assert_eq!(response.asks[0].price.to_f64(), 10.0);
    assert_eq!(response.asks[0].quantity, 3);

    let (from, to) = Period::Week.range_ending(Utc::now());
    let response = api
        .get_candles("BBG004730N88", from, to, CandleInterval::Day)
        .await
        .unwrap();
    assert!(response.candles.is_empty());

    book.assert_async().await;
    candles.assert_async().await;
}

#[tokio::test]
async fn accounts_endpoint_depends_on_mode() {
    let sandbox_body = r#"{"accounts": [{"id": "sb-1", "type": "ACCOUNT_TYPE_TINKOFF"}]}"#;
    let mut server = Server::new_async().await;
    let sandbox = server
        .mock("POST", path("SandboxService/GetSandboxAccounts").as_str())
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(sandbox_body)
        .create_async()
        .await;
    let live = server
        .mock("POST", path("UsersService/GetAccounts").as_str())
        .with_status(200)
        .with_body(r#"{"accounts": []}"#)
        .create_async()
        .await;

    let sandbox_api = http_client(&server.url(), true);
    let accounts = sandbox_api.get_accounts().await.unwrap();
    assert_eq!(accounts.accounts[0].id, "sb-1");
    assert_eq!(accounts.accounts[0].account_type, "ACCOUNT_TYPE_TINKOFF");

    let live_api = http_client(&server.url(), false);
    let accounts = live_api.get_accounts().await.unwrap();
    assert!(accounts.accounts.is_empty());

    sandbox.assert_async().await;
    live.assert_async().await;
}

#[tokio::test]
async fn unauthorized_status_maps_to_error() {
    let body = r#"{
        "code": 16,
        "message": "authentication token is missing or invalid",
        "description": "40003"
    }"#;
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(401)
        .with_body(body)
        .create_async()
        .await;

    let api = http_client(&server.url(), true);
    let err = api.find_instrument("SBER").await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn server_error_keeps_gateway_message() {
    let body = r#"{"code": 13, "message": "internal error", "description": "70001"}"#;
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(500)
        .with_body(body)
        .create_async()
        .await;

    let api = http_client(&server.url(), true);
    match api.get_order_book("BBG004730N88", 1).await.unwrap_err() {
        AppError::Api { status, message } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "internal error (70001)");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn status_mapping() {
    assert!(matches!(
        error_from_status(StatusCode::TOO_MANY_REQUESTS, ""),
        AppError::RateLimitExceeded
    ));
    assert!(matches!(
        error_from_status(StatusCode::NOT_FOUND, "missing"),
        AppError::NotFound
    ));
    match error_from_status(StatusCode::BAD_GATEWAY, " upstream down ") {
        AppError::Api { message, .. } => assert_eq!(message, "upstream down"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn method_url_joins_package_and_service() {
    let api = http_client("http://localhost:1234/rest/", true);
    assert_eq!(api.base_url(), "http://localhost:1234/rest");
    assert_eq!(
        api.method_url("MarketDataService", "GetCandles"),
        format!("{}{PREFIX}.MarketDataService/GetCandles", api.base_url())
    );
}

#[tokio::test]
async fn resolver_end_to_end_over_http() {
    let search_body = r#"{"instruments": [
        {"figi": "TCS0000001", "ticker": "SBER"},
        {"figi": "BBG0000002", "ticker": "SBER"}
    ]}"#;
    let book_body = r#"{
        "bids": [{"price": {"units": "280", "nano": 500000000}, "quantity": "1"}],
        "asks": []
    }"#;
    let mut server = Server::new_async().await;
    let _search = server
        .mock("POST", path("InstrumentsService/FindInstrument").as_str())
        .with_status(200)
        .with_body(search_body)
        .create_async()
        .await;
    let _last = server
        .mock("POST", path("MarketDataService/GetLastPrices").as_str())
        .match_body(Matcher::Json(json!({"figi": ["BBG0000002"]})))
        .with_status(200)
        .with_body(r#"{"lastPrices": [{"figi": "BBG0000002", "price": {}}]}"#)
        .create_async()
        .await;
    let _book = server
        .mock("POST", path("MarketDataService/GetOrderBook").as_str())
        .with_status(200)
        .with_body(book_body)
        .create_async()
        .await;

    let mut config = Config::new();
    config.sandbox_mode = true;
    let api = http_client(&server.url(), true);
    let client = Client::with_api(config, api);

    assert_eq!(client.get_current_price("SBER").await, Some(280.50));
}

#[tokio::test]
async fn transport_failure_collapses_to_absence() {
    // nothing listens on this port
    let api = http_client("http://127.0.0.1:9", true);
    let client = Client::with_api(Config::new(), api);

    assert_eq!(client.get_current_price("BBG0000002").await, None);
    assert!(
        client
            .get_historical_data("BBG0000002", "1d")
            .await
            .is_empty()
    );
    assert!(matches!(
        client.lookup_current_price("BBG0000002").await,
        Err(AppError::Network(_))
    ));
}

#[tokio::test]
async fn connect_survives_failed_account_listing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("sandbox_token.txt"), TOKEN).unwrap();
    let mut server = Server::new_async().await;
    let accounts = server
        .mock("POST", path("SandboxService/GetSandboxAccounts").as_str())
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(500)
        .with_body(r#"{"code": 13, "message": "internal error"}"#)
        .create_async()
        .await;

    let client = Client::connect(sandbox_config(&server.url(), dir.path())).await;

    accounts.assert_async().await;
    let client = match client {
        Ok(client) => client,
        Err(e) => panic!("Unexpected error: {e:?}"),
    };
    assert!(client.config().sandbox_mode);
}

#[tokio::test]
async fn connect_without_token_is_config_error() {
    let dir = tempdir().unwrap();
    let mut server = Server::new_async().await;
    let accounts = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = Client::connect(sandbox_config(&server.url(), dir.path())).await;

    assert!(matches!(result, Err(AppError::Config(_))));
    accounts.assert_async().await;
}
