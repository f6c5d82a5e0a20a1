/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::AccessToken;
use crate::application::config::Config;
use crate::application::interfaces::api::MarketDataApi;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{SERVICE_PACKAGE, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{
    CandleInterval, FindInstrumentRequest, GetAccountsRequest, GetCandlesRequest,
    GetLastPricesRequest, GetOrderBookRequest,
};
use crate::model::responses::{
    AccountsResponse, ApiErrorBody, CandlesResponse, FindInstrumentResponse, LastPricesResponse,
    OrderBookResponse,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

/// REST gateway client for the T-Invest API
///
/// Every call is a JSON `POST` to `{base_url}/{package}.{Service}/{Method}`
/// authenticated with the bearer token. Requests are throttled by the
/// configured rate limiter and are never retried.
pub struct HttpClient {
    http_client: Client,
    rate_limiter: RateLimiter,
    token: AccessToken,
    base_url: String,
    app_name: String,
    sandbox_mode: bool,
}

impl HttpClient {
    /// Creates a transport for the mode selected in `config`
    pub fn new(config: &Config, token: AccessToken) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            rate_limiter: RateLimiter::new(&config.rate_limiter),
            token,
            base_url: config.active_base_url().trim_end_matches('/').to_string(),
            app_name: config.rest_api.app_name.clone(),
            sandbox_mode: config.sandbox_mode,
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a gateway method
    #[must_use]
    pub fn method_url(&self, service: &str, method: &str) -> String {
        format!(
            "{}/{}.{}/{}",
            self.base_url, SERVICE_PACKAGE, service, method
        )
    }

    /// Calls a gateway method and decodes its JSON answer
    pub async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        service: &str,
        method: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.method_url(service, method);
        let headers = [
            ("x-app-name", self.app_name.as_str()),
            ("Accept", "application/json"),
        ];
        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            &url,
            &self.token,
            &headers,
            body,
        )
        .await?;
        Ok(response.json().await?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("app_name", &self.app_name)
            .field("sandbox_mode", &self.sandbox_mode)
            .field("token", &self.token)
            .finish()
    }
}

#[async_trait]
impl MarketDataApi for HttpClient {
    async fn find_instrument(&self, query: &str) -> Result<FindInstrumentResponse, AppError> {
        self.call(
            "InstrumentsService",
            "FindInstrument",
            &FindInstrumentRequest::new(query),
        )
        .await
    }

    async fn get_last_prices(&self, figis: &[String]) -> Result<LastPricesResponse, AppError> {
        let body = GetLastPricesRequest {
            figi: figis.to_vec(),
        };
        self.call("MarketDataService", "GetLastPrices", &body).await
    }

    async fn get_order_book(&self, figi: &str, depth: u32) -> Result<OrderBookResponse, AppError> {
        let body = GetOrderBookRequest {
            figi: figi.to_string(),
            depth,
        };
        self.call("MarketDataService", "GetOrderBook", &body).await
    }

    async fn get_candles(
        &self,
        figi: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        interval: CandleInterval,
    ) -> Result<CandlesResponse, AppError> {
        let body = GetCandlesRequest {
            figi: figi.to_string(),
            from,
            to,
            interval,
        };
        self.call("MarketDataService", "GetCandles", &body).await
    }

    async fn get_accounts(&self) -> Result<AccountsResponse, AppError> {
        let (service, method) = if self.sandbox_mode {
            ("SandboxService", "GetSandboxAccounts")
        } else {
            ("UsersService", "GetAccounts")
        };
        self.call(service, method, &GetAccountsRequest::default())
            .await
    }
}

/// Sends one authenticated JSON `POST` after waiting for the rate limiter
///
/// # Returns
///
/// * `Ok(Response)` - 2xx response, body not yet read
/// * `Err(AppError)` - transport failure or a non-success status mapped by
///   [`error_from_status`]
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: &RateLimiter,
    url: &str,
    token: &AccessToken,
    headers: &[(&str, &str)],
    body: &B,
) -> Result<Response, AppError> {
    rate_limiter.wait().await;

    debug!("POST {}", url);

    let mut request = client.post(url).bearer_auth(token.expose()).json(body);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    Err(error_from_status(status, &body_text))
}

/// Maps a non-success gateway answer to an [`AppError`]
///
/// The gateway error body (`{"code", "message", "description"}`) is used for
/// the message when it parses; otherwise the raw body is kept.
pub fn error_from_status(status: StatusCode, body: &str) -> AppError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.message.is_empty() => {
            if parsed.description.is_empty() {
                parsed.message
            } else {
                format!("{} ({})", parsed.message, parsed.description)
            }
        }
        _ => body.trim().to_string(),
    };

    match status {
        StatusCode::UNAUTHORIZED => {
            error!("Unauthorized: {}", message);
            AppError::Unauthorized
        }
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("Rate limit exceeded: {}", message);
            AppError::RateLimitExceeded
        }
        StatusCode::NOT_FOUND => {
            debug!("Not found: {}", message);
            AppError::NotFound
        }
        _ => {
            error!("Request failed with status {}: {}", status, message);
            AppError::Api { status, message }
        }
    }
}
