/*
[INPUT]:  HTTP configuration (base URL, timeouts, API key, optional transport)
[OUTPUT]: Configured client that dispatches API requests
[POS]:    HTTP layer - core client implementation and request dispatch
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::env;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::envelope::decode_envelope;
use crate::http::error::{check_response, classify_error};
use crate::http::{ApiRequest, ProxyhatError, Result};

/// Base URL for the ProxyHat API
pub const DEFAULT_BASE_URL: &str = "https://api.proxyhat.com/v1";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CLIENT_USER_AGENT: &str = concat!("proxyhat-rust/", env!("CARGO_PKG_VERSION"));

const ENV_API_KEY: &str = "PROXYHAT_API_KEY";
const ENV_BASE_URL: &str = "PROXYHAT_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "PROXYHAT_TIMEOUT_SECS";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `PROXYHAT_BASE_URL` and `PROXYHAT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ProxyhatError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Main HTTP client for the ProxyHat API.
///
/// Holds configuration only; it is cheap to clone and safe to share across
/// tasks because the underlying `reqwest::Client` is pooled.
#[derive(Debug, Clone)]
pub struct ProxyhatClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl ProxyhatClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Self::with_http_client(api_key, config, http_client)
    }

    /// Create a client on top of a caller-supplied transport.
    ///
    /// The configured timeout still applies to every request. The
    /// `connect_timeout` is not applied; set it on the supplied client.
    pub fn with_http_client(
        api_key: impl Into<String>,
        config: ClientConfig,
        http_client: Client,
    ) -> Result<Self> {
        Url::parse(&config.base_url)?;
        Ok(Self {
            http_client,
            base_url: config.base_url,
            api_key: api_key.into(),
            timeout: config.timeout,
        })
    }

    /// Create a client from `PROXYHAT_API_KEY` and [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_API_KEY)
            .map_err(|_| ProxyhatError::Config(format!("{ENV_API_KEY} is not set")))?;
        Self::with_config(api_key, ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a request and decode the (possibly enveloped) body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.dispatch(request).await?;
        decode_envelope(&body)
    }

    /// Execute a request whose response body is not needed.
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<()> {
        self.dispatch(request).await.map(|_| ())
    }

    /// Execute a request and hand back the unread response on success.
    ///
    /// Used for binary downloads; no `Accept` header is sent.
    pub async fn execute_raw(&self, request: ApiRequest) -> Result<Response> {
        let builder = self.request_builder(&request)?;
        let response = self.send(builder).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| self.map_transport(e))?;
        Err(classify_error(status, &headers, &body))
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let builder = self
            .request_builder(&request)?
            .header(ACCEPT, "application/json");
        let response = self.send(builder).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| self.map_transport(e))?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        check_response(status, &headers, &body)?;
        Ok(body.to_vec())
    }

    fn request_builder(&self, request: &ApiRequest) -> Result<RequestBuilder> {
        let url = request.url(&self.base_url)?;
        debug!(method = %request.method, url = %url, "dispatching request");

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .timeout(self.timeout)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(USER_AGENT, CLIENT_USER_AGENT);

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        builder.send().await.map_err(|e| self.map_transport(e))
    }

    fn map_transport(&self, err: reqwest::Error) -> ProxyhatError {
        if err.is_timeout() {
            ProxyhatError::Timeout {
                duration: self.timeout,
            }
        } else {
            ProxyhatError::Http(err)
        }
    }
}
