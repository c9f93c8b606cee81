//! In-memory request executor for unit tests

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::github::executor::{ApiResponse, Query, RequestExecutor};

/// A request seen by [`RecordingExecutor`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

type Responder = Box<dyn Fn(&RecordedRequest) -> Result<ApiResponse> + Send + Sync>;

/// Records every request and answers with a scripted responder
pub struct RecordingExecutor {
    requests: Mutex<Vec<RecordedRequest>>,
    responder: Responder,
}

impl RecordingExecutor {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> Result<ApiResponse> + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    /// Executor answering every request with the same status and body
    pub fn answering(status: u16, body: Value) -> Self {
        Self::new(move |_| Ok(ApiResponse::new(status, body.clone())))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: RecordedRequest) -> Result<ApiResponse> {
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    async fn get(&self, path: &str, query: &Query) -> Result<ApiResponse> {
        self.record(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
        })
    }

    async fn put(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        self.record(RecordedRequest {
            method: "PUT",
            path: path.to_string(),
            query: Vec::new(),
            body: body.cloned(),
        })
    }

    async fn delete(&self, path: &str, query: &Query) -> Result<ApiResponse> {
        self.record(RecordedRequest {
            method: "DELETE",
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
        })
    }
}
