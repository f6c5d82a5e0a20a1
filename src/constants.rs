/// Base URL of the live T-Invest REST gateway
pub const DEFAULT_REST_BASE_URL: &str = "https://invest-public-api.tinkoff.ru/rest";
/// Base URL of the sandbox T-Invest REST gateway
pub const DEFAULT_SANDBOX_REST_BASE_URL: &str =
    "https://sandbox-invest-public-api.tinkoff.ru/rest";
/// Package prefix of every gRPC service exposed through the REST gateway
pub const SERVICE_PACKAGE: &str = "tinkoff.public.invest.api.contract.v1";
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = "tinvest-client/0.1.0";
/// Application name reported to the API in the `x-app-name` header
pub const DEFAULT_APP_NAME: &str = "tinvest-client";
/// Default request timeout in seconds
pub const DEFAULT_REST_TIMEOUT: u64 = 30;

/// FIGI prefix of Bloomberg-issued identifiers
pub const BBG_PREFIX: &str = "BBG";
/// FIGI prefix of broker-issued identifiers
pub const TCS_PREFIX: &str = "TCS";

/// Nano-units in one hundredth of a unit
pub const NANO_PER_HUNDREDTH: i64 = 10_000_000;

/// Depth requested when falling back to the order book for a price
pub const ORDER_BOOK_FALLBACK_DEPTH: u32 = 1;
/// Period token used when looking up a trading volume
pub const VOLUME_PERIOD: &str = "1d";

/// Default market currency
pub const DEFAULT_CURRENCY: &str = "RUB";
/// Default baseline capital, in units of the market currency
pub const DEFAULT_BASELINE_CAPITAL: f64 = 10_000.0;
/// Default market timezone
pub const DEFAULT_MARKET_TIMEZONE: &str = "Europe/Moscow";
/// Default opening time of the main trading session (market time)
pub const DEFAULT_TRADING_START: &str = "10:00";
/// Default closing time of the main trading session (market time)
pub const DEFAULT_TRADING_END: &str = "18:40";

/// Default directory holding the token files
pub const DEFAULT_TOKENS_DIR: &str = "Tokens";
/// Default file name of the sandbox token
pub const DEFAULT_SANDBOX_TOKEN_FILE: &str = "sandbox_token.txt";
/// Default file name of the live trading token
pub const DEFAULT_REAL_TOKEN_FILE: &str = "real_token.txt";

/// Default maximum number of requests per rate limiter period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 300;
/// Default rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default rate limiter burst size
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 20;

/// Market indices and their FIGIs
pub const MARKET_INDICES: [(&str, &str); 2] =
    [("IMOEX", "BBG004730N88"), ("RTSI", "BBG004S68614")];
