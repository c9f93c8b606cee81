//! GitHub HTTP client for API interactions

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

use crate::config::api;
use crate::error::{GhError, Result};
use crate::github::executor::{ApiResponse, Query, RequestExecutor};

/// GitHub REST API client
pub struct GhClient {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GhClient {
    /// Create a new client with optimized connection settings
    ///
    /// `base_url` is the API root, e.g. `https://api.github.com` or
    /// `https://ghe.example.com/api/v3` for GitHub Enterprise Server.
    pub fn new(token: Option<String>, base_url: &str) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// API root all paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an Authorization header
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Build the absolute URL for `path` with query parameters appended
    pub(crate) fn url(&self, path: &str, query: &Query) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| GhError::Config(format!("Invalid API URL '{}': {}", self.base_url, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder
            .header("Accept", api::ACCEPT)
            .header("X-GitHub-Api-Version", api::API_VERSION)
            .header("User-Agent", api::USER_AGENT);
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send a request and classify the response
    async fn execute(&self, builder: reqwest::RequestBuilder, label: &str) -> Result<ApiResponse> {
        let response = self.with_headers(builder).send().await?;
        Self::into_api_response(response, label).await
    }

    /// Convert a raw response into an [`ApiResponse`] or a typed error
    ///
    /// 404 becomes [`GhError::NotFound`]; every other non-success status
    /// becomes [`GhError::Api`] carrying the API's `message` when present.
    async fn into_api_response(response: reqwest::Response, label: &str) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let next_page = response
            .headers()
            .get("link")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_next_page);

        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        debug!("{} -> {}", label, status);

        if (200..300).contains(&status) {
            return Ok(ApiResponse {
                status,
                body,
                next_page,
            });
        }

        let api_message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(|m| m.to_string());

        match status {
            404 => Err(GhError::NotFound {
                message: api_message.unwrap_or_else(|| label.to_string()),
            }),
            _ => Err(GhError::Api {
                status,
                message: match api_message {
                    Some(m) => format!("{}: {}", label, m),
                    None => format!("{} failed", label),
                },
            }),
        }
    }
}

#[async_trait]
impl RequestExecutor for GhClient {
    async fn get(&self, path: &str, query: &Query) -> Result<ApiResponse> {
        let url = self.url(path, query)?;
        debug!("GET {}", url);
        self.execute(self.client.get(url), &format!("GET {}", path))
            .await
    }

    async fn put(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        let url = self.url(path, &[])?;
        debug!("PUT {}", url);
        let builder = match body {
            Some(body) => self.client.put(url).json(body),
            // GitHub expects an explicit zero length for body-less PUTs
            None => self.client.put(url).header("Content-Length", "0"),
        };
        self.execute(builder, &format!("PUT {}", path)).await
    }

    async fn delete(&self, path: &str, query: &Query) -> Result<ApiResponse> {
        let url = self.url(path, query)?;
        debug!("DELETE {}", url);
        self.execute(self.client.delete(url), &format!("DELETE {}", path))
            .await
    }
}

/// Extract the page number of the `rel="next"` entry of a `Link` header
pub fn parse_next_page(link: &str) -> Option<u32> {
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|p| p.trim() == "rel=\"next\"");
        if !is_next {
            return None;
        }
        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse().ok())
    })
}

#[cfg(test)]
impl GhClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(Some("test-token".to_string()), base_url)
    }
}
