use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use url::Url;

/// Shared HTTP client for the collector backend.
///
/// Endpoints are configured as paths appended verbatim to the base URL.
#[derive(Clone)]
pub struct CollectorClient {
    pub client: Client,
    pub base_url: String,
    pub bearer_token: Option<String>,
}

impl CollectorClient {
    pub fn new(
        base_url: &str,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, url::ParseError> {
        Url::parse(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(
                    error = %err,
                    timeout_ms = timeout.as_millis() as u64,
                    "Collector client could not be configured, using defaults without timeout"
                );
                Client::new()
            });

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.filter(|token| !token.trim().is_empty()),
        })
    }

    /// Full URL for an endpoint path such as `/productos`.
    pub fn endpoint_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Request builder with the bearer token attached when one is configured.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
