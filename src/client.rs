//! Async HTTP client for the TON Center API.

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::params::{QueryError, flatten_query};
use crate::v2::V2Api;
use crate::v3::V3Api;

const LOG_TARGET: &str = "toncenter_client::transport";

const MAINNET_URL: &str = "https://toncenter.com";
const TESTNET_URL: &str = "https://testnet.toncenter.com";

/// Non-2xx response from the API.
///
/// `message` is the `error` field of the response body. When the body has no
/// such field, the status' reason phrase is used instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API Error: {status} - {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Returns `true` for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }

    /// Returns `true` for a 503 response. `getTokenData` answers this way
    /// when the contract is not a jetton or NFT.
    pub fn is_service_unavailable(&self) -> bool {
        self.status == StatusCode::SERVICE_UNAVAILABLE.as_u16()
    }

    /// Returns `true` when the request was rejected by the rate limiter.
    pub fn is_rate_limited(&self) -> bool {
        self.status == StatusCode::TOO_MANY_REQUESTS.as_u16()
    }

    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|body| match body.get("error") {
                Some(Value::String(message)) => Some(message.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        Self {
            status: status.as_u16(),
            message,
        }
    }
}

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No response was obtained: connection, TLS or timeout failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid query parameters: {0}")]
    Query(#[from] QueryError),
    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] header::InvalidHeaderValue),
}

impl Error {
    /// The normalized API error, if the server answered with a non-2xx status.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Connection settings shared by both API generations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Log every request and response body at `info` level.
    pub log_requests: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            log_requests: false,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Build a config from `TONCENTER_BASE_URL`, `TONCENTER_API_KEY` and
    /// `TONCENTER_LOG_REQUESTS`. The base URL defaults to mainnet.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("TONCENTER_BASE_URL").unwrap_or_else(|| MAINNET_URL.to_string());
        let mut config = Self::new(base_url);
        config.api_key = lookup("TONCENTER_API_KEY").filter(|key| !key.is_empty());
        config.log_requests = lookup("TONCENTER_LOG_REQUESTS")
            .map(|flag| matches!(flag.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);
        config
    }
}

/// Issues one HTTP exchange per call against a fixed base URL.
///
/// GET and DELETE parameters are flattened into the query string, every other
/// method sends its parameters as the JSON body. Holds no per-call state, so
/// clones share the underlying connection pool and may be used concurrently.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    client: Client,
    base_url: String,
    log_requests: bool,
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(api_key)?;
            value.set_sensitive(true);
            headers.insert("X-Api-Key", value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            log_requests: config.log_requests,
        })
    }

    pub(crate) async fn get<P, R>(&self, path: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::GET, path, Some(params)).await
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn request<P, R>(
        &self,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let params = match params {
            Some(params) => serde_json::to_value(params)?,
            None => Value::Null,
        };

        if self.log_requests {
            log::info!(target: LOG_TARGET, "API request {method} {path} params={params}");
        }

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method.clone(), url);
        if method == Method::GET || method == Method::DELETE {
            let pairs = flatten_query(&params)?;
            if !pairs.is_empty() {
                request = request.query(&pairs);
            }
        } else if !params.is_null() {
            request = request.json(&params);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if self.log_requests {
            log::info!(
                target: LOG_TARGET,
                "API response {method} {path} status={status} body={body}"
            );
        }

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            log::debug!(target: LOG_TARGET, "{method} {path} failed: {err}");
            return Err(err.into());
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Entry point exposing both API generations over one connection pool.
///
/// # Example
///
/// ```no_run
/// use toncenter_client::TonCenterClient;
///
/// #[tokio::main]
/// async fn main() -> toncenter_client::client::Result<()> {
///     let client = TonCenterClient::mainnet()?;
///     let balance = client
///         .v2()
///         .get_address_balance("EQCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales")
///         .await?;
///     println!("Balance: {} nanotons", balance.result);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TonCenterClient {
    config: ClientConfig,
    v2: V2Api,
    v3: V3Api,
}

impl TonCenterClient {
    /// Create a client for a custom base URL without an API key.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self {
            v2: V2Api::new(transport.clone()),
            v3: V3Api::new(transport),
            config,
        })
    }

    /// Create a client for TON mainnet.
    pub fn mainnet() -> Result<Self> {
        Self::new(MAINNET_URL)
    }

    /// Create a client for TON testnet.
    pub fn testnet() -> Result<Self> {
        Self::new(TESTNET_URL)
    }

    /// Create a client from the `TONCENTER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The `/api/v2` surface.
    pub fn v2(&self) -> &V2Api {
        &self.v2
    }

    /// The `/api/v3` indexer surface.
    pub fn v3(&self) -> &V3Api {
        &self.v3
    }
}
