//! Test doubles for code that depends on [`RegistryHttpClient`].

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::RegistryHttpClient;
use crate::error::{RegistryError, Result};

/// Canned answer returned by [`StubRegistryClient`].
pub enum StubResponse {
    Json(Value),
    NetworkError,
    Status(u16),
}

/// Records every query it receives and answers from a queue of canned
/// responses. Once the queue is drained the fallback response is repeated.
pub struct StubRegistryClient {
    responses: Mutex<VecDeque<StubResponse>>,
    fallback: Value,
    queries: Mutex<Vec<String>>,
}

impl StubRegistryClient {
    pub fn new(fallback: Value) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// A registry that knows nothing.
    pub fn empty() -> Self {
        Self::new(serde_json::json!({ "page": 1, "total_pages": 0, "results": [] }))
    }

    pub fn push_response(&self, response: StubResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> Option<String> {
        self.queries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RegistryHttpClient for StubRegistryClient {
    async fn search(&self, query: &str) -> Result<Value> {
        self.queries.lock().unwrap().push(query.to_string());
        let url = format!("stub:///search?{query}");

        match self.responses.lock().unwrap().pop_front() {
            Some(StubResponse::Json(value)) => Ok(value),
            Some(StubResponse::NetworkError) => Err(RegistryError::Transport {
                url,
                message: "Failed to fetch".to_string(),
            }),
            Some(StubResponse::Status(status)) => Err(RegistryError::Status { url, status }),
            None => Ok(self.fallback.clone()),
        }
    }
}
