/*
[INPUT]:  HTTP method, relative path, optional JSON body and query values
[OUTPUT]: Request descriptor and fully composed request URL
[POS]:    HTTP layer - per-call request description
[UPDATE]: When request composition rules change
*/

use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;

use crate::http::{ProxyhatError, Result};

/// Description of a single API call, built per request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append several query parameters.
    pub fn query_pairs<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Compose the absolute URL against `base_url`.
    ///
    /// Slashes between base and path are normalized to exactly one.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let joined = join_path(base_url, &self.path);
        let mut url = Url::parse(&joined)?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

pub(crate) fn join_path(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a relative path from fixed segments and caller-supplied values.
/// Each value is percent-encoded as one path segment. Dot segments are
/// rejected since URL parsing would resolve them against the base path.
pub(crate) fn endpoint(segments: &[&str]) -> Result<String> {
    let mut encoded = Vec::with_capacity(segments.len());
    for segment in segments {
        if matches!(*segment, "." | "..") {
            return Err(ProxyhatError::Config(format!(
                "path segment {segment:?} is not allowed"
            )));
        }
        encoded.push(encode_segment(segment));
    }
    Ok(encoded.join("/"))
}

fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
