/*
[INPUT]:  Error sources (HTTP transport, API responses, serialization, cancellation)
[OUTPUT]: Structured error types with classification predicates and retry hints
[POS]:    Error handling layer - unified error types and response classification
[UPDATE]: When adding new error sources or changing status classification
*/

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error response returned by the ProxyHat API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    /// Structured detail from the `errors` key, kept verbatim.
    pub errors: Option<Value>,
}

/// Error returned when the API rate limit is exceeded (HTTP 429).
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitError {
    pub message: String,
    pub status_code: u16,
    pub errors: Option<Value>,
    /// Seconds to wait before retrying, 0 when the server gave no hint.
    pub retry_after: u64,
}

impl RateLimitError {
    pub fn retry_after_duration(&self) -> Duration {
        Duration::from_secs(self.retry_after)
    }
}

fn write_status(f: &mut fmt::Formatter<'_>, status_code: u16, message: &str) -> fmt::Result {
    if !message.is_empty() {
        return write!(f, "proxyhat: {status_code} {message}");
    }
    let reason = StatusCode::from_u16(status_code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("");
    write!(f, "proxyhat: {status_code} {reason}")
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_status(f, self.status_code, &self.message)
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_status(f, self.status_code, &self.message)
    }
}

impl std::error::Error for RateLimitError {}

/// Main error type for the ProxyHat client
#[derive(Error, Debug)]
pub enum ProxyhatError {
    /// API returned a non-2xx response
    #[error(transparent)]
    Api(#[from] ApiError),

    /// API returned 429
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// HTTP request could not be built, sent, or its body read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request did not complete before its deadline
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,
}

impl ProxyhatError {
    /// HTTP status of a classified API response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProxyhatError::Api(e) => Some(e.status_code),
            ProxyhatError::RateLimit(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Human-readable message extracted from the error body, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ProxyhatError::Api(e) => Some(e.message.as_str()),
            ProxyhatError::RateLimit(e) => Some(e.message.as_str()),
            _ => None,
        }
    }

    /// Structured `errors` payload, typically field-level validation detail.
    pub fn validation_errors(&self) -> Option<&Value> {
        match self {
            ProxyhatError::Api(e) => e.errors.as_ref(),
            ProxyhatError::RateLimit(e) => e.errors.as_ref(),
            _ => None,
        }
    }

    /// Check if the error is a 401 Unauthorized
    pub fn is_authentication_error(&self) -> bool {
        match self {
            ProxyhatError::Api(e) => e.status_code == StatusCode::UNAUTHORIZED.as_u16(),
            ProxyhatError::RateLimit(e) => e.status_code == StatusCode::UNAUTHORIZED.as_u16(),
            _ => false,
        }
    }

    /// Check if the error is a 403 Forbidden
    pub fn is_permission_error(&self) -> bool {
        self.api_status_is(StatusCode::FORBIDDEN)
    }

    /// Check if the error is a 404 Not Found
    pub fn is_not_found(&self) -> bool {
        self.api_status_is(StatusCode::NOT_FOUND)
    }

    /// Check if the error is a 422 Unprocessable Entity
    pub fn is_validation_error(&self) -> bool {
        self.api_status_is(StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// Check if the error is a rate limit, by type or by a 429 status
    pub fn is_rate_limited(&self) -> bool {
        match self {
            ProxyhatError::RateLimit(_) => true,
            ProxyhatError::Api(e) => e.status_code == StatusCode::TOO_MANY_REQUESTS.as_u16(),
            _ => false,
        }
    }

    /// Check if the call was aborted by a deadline or cancellation signal
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ProxyhatError::Timeout { .. } | ProxyhatError::Cancelled)
    }

    /// Retry-after hint of a rate-limit error
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ProxyhatError::RateLimit(e) => Some(e.retry_after_duration()),
            _ => None,
        }
    }

    /// Check if a caller-side retry may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ProxyhatError::Http(_)
            | ProxyhatError::RateLimit(_)
            | ProxyhatError::Timeout { .. } => true,
            ProxyhatError::Api(e) => e.status_code >= 500,
            _ => false,
        }
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            ProxyhatError::RateLimit(e) => Some(e.retry_after),
            ProxyhatError::Timeout { .. } => Some(1),
            _ => None,
        }
    }

    fn api_status_is(&self, status: StatusCode) -> bool {
        matches!(self, ProxyhatError::Api(e) if e.status_code == status.as_u16())
    }
}

/// Result type alias for ProxyHat operations
pub type Result<T> = std::result::Result<T, ProxyhatError>;

/// Classify an HTTP response. 2xx passes; anything else becomes an
/// [`ApiError`], or a [`RateLimitError`] for 429.
pub(crate) fn check_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(classify_error(status, headers, body))
}

/// Build the typed error for a non-2xx response.
pub(crate) fn classify_error(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> ProxyhatError {
    let object = serde_json::from_slice::<Map<String, Value>>(body).ok();
    let message = object.as_ref().map(error_message).unwrap_or_default();
    let errors = object
        .as_ref()
        .and_then(|object| object.get("errors"))
        .filter(|value| !value.is_null())
        .cloned();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return RateLimitError {
            message,
            status_code: status.as_u16(),
            errors,
            retry_after: parse_retry_after(headers),
        }
        .into();
    }

    ApiError {
        message,
        status_code: status.as_u16(),
        errors,
    }
    .into()
}

fn error_message(object: &Map<String, Value>) -> String {
    ["description", "message"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

/// Whole seconds only. Padded, negative, or HTTP-date values yield 0.
fn parse_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
