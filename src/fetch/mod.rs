//! Network fetch seam.
//!
//! [`Fetch`] is the host-provided network facility the worker suspends on;
//! [`HttpFetcher`] is the reqwest-backed implementation, resolving
//! root-relative paths against a configured origin. Tests inject their own
//! `Fetch` implementations instead.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::types::{Method, Request, Response};
use crate::{Result, VordrError};

/// Default HTTP timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Network fetch facility.
///
/// Transport-level failures are `Err`; a completed exchange with any
/// status code (including 4xx/5xx) is `Ok`. The install handler is the
/// only caller that inspects the status — the fallback path returns
/// whatever the network yields, unmodified.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Perform a live network fetch for the request.
    async fn fetch(&self, request: &Request) -> Result<Response>;
}

/// Reqwest-backed fetcher bound to a single origin.
#[derive(Clone)]
pub struct HttpFetcher {
    http: Client,
    origin: String,
}

impl HttpFetcher {
    /// Create a fetcher for the given origin (scheme + authority) with the
    /// default timeout.
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_timeout(origin, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(origin: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a request URL: root-relative paths are joined to the
    /// origin, absolute URLs pass through.
    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.origin, url)
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        let url = self.resolve(&request.url);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let response = self
            .http
            .request(method, &url)
            .send()
            .await
            .map_err(|e| VordrError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| VordrError::Http(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
