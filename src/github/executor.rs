//! Request executor seam between resource clients and the HTTP transport

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{GhError, Result};

/// Query parameters forwarded verbatim to the API
pub type Query = [(String, String)];

/// Decoded API response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body (`Value::Null` for empty bodies)
    pub body: Value,
    /// Next page number advertised by the `Link` header
    pub next_page: Option<u32>,
}

impl ApiResponse {
    /// Create a response without pagination info
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            next_page: None,
        }
    }

    /// `204 No Content`
    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }

    /// Deserialize the body into a typed value
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(|e| {
            GhError::Json(format!(
                "Failed to parse response body (status {}): {}",
                self.status, e
            ))
        })
    }
}

/// Outcome of a lookup where "not found" is an answer, not a failure
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(ApiResponse),
    NotFound,
}

/// Performs HTTP calls against the API
///
/// Implementations own authentication, transport and status classification:
/// a 404 must surface as [`GhError::NotFound`], any other non-2xx status as
/// another error kind.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// GET `path` with query parameters
    async fn get(&self, path: &str, query: &Query) -> Result<ApiResponse>;

    /// PUT `path`, with an optional JSON body
    async fn put(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse>;

    /// DELETE `path` with query parameters
    async fn delete(&self, path: &str, query: &Query) -> Result<ApiResponse>;

    /// GET `path`, turning the not-found error kind into [`Lookup::NotFound`]
    ///
    /// Every other error is returned unchanged.
    async fn probe(&self, path: &str, query: &Query) -> Result<Lookup> {
        match self.get(path, query).await {
            Ok(response) => Ok(Lookup::Found(response)),
            Err(GhError::NotFound { .. }) => Ok(Lookup::NotFound),
            Err(e) => Err(e),
        }
    }
}
