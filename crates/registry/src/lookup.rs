use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::RegistryHttpClient;
use crate::details::CompanyDetails;
use crate::error::{ErrorKind, RegistryError, Result};
use crate::identifier::CompanyIdentifier;
use crate::query::{QueryBuilder, SearchRequest};
use crate::result::ToolResult;

pub const INVALID_FORMAT_MESSAGE: &str = "invalid identifier format";
pub const NOT_FOUND_MESSAGE: &str = "company not found";
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";

/// One page of search results as returned by the registry.
///
/// Only the envelope is interpreted; records are kept as received.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub page: Option<u64>,
    pub total_pages: Option<u64>,
    /// The `results` array, or the whole body when the registry answered
    /// with an unexpected shape.
    pub results: Value,
}

impl SearchResult {
    pub fn from_body(body: Value) -> Self {
        let page = body.get("page").and_then(Value::as_u64);
        let total_pages = body.get("total_pages").and_then(Value::as_u64);
        let results = match body.get("results") {
            Some(results) => results.clone(),
            None => body,
        };

        Self {
            page,
            total_pages,
            results,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Search results (page {} of {}):\n{:#}",
            display_count(self.page),
            display_count(self.total_pages),
            self.results
        )
    }
}

fn display_count(value: Option<u64>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}

/// Company search and detail lookups against the registry.
///
/// Holds no per-request state: every call issues exactly one request and
/// folds any failure into an error [`ToolResult`].
#[derive(Clone)]
pub struct CompanyLookupService {
    client: Arc<dyn RegistryHttpClient>,
}

impl CompanyLookupService {
    pub fn new(client: Arc<dyn RegistryHttpClient>) -> Self {
        Self { client }
    }

    pub async fn search(&self, request: &SearchRequest) -> ToolResult {
        match self.fetch_search(request).await {
            Ok(result) => ToolResult::success(result.summary()),
            Err(e) => {
                warn!("Company search for {:?} failed: {}", request.query, e);
                ToolResult::error_message(&e.to_string())
            }
        }
    }

    pub async fn fetch_search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let query = QueryBuilder::search_query(request);
        debug!("Searching companies with query {}", query);

        let body = self.client.search(&query).await?;
        Ok(SearchResult::from_body(body))
    }

    pub async fn get_details(&self, identifier: &str) -> ToolResult {
        match self.render_details(identifier).await {
            Ok(text) => ToolResult::success(text),
            Err(e) => {
                let message = match e.kind() {
                    ErrorKind::InvalidFormat => INVALID_FORMAT_MESSAGE,
                    ErrorKind::NotFound => NOT_FOUND_MESSAGE,
                    ErrorKind::Network => {
                        warn!("Company lookup for {:?} failed: {}", identifier, e);
                        NETWORK_ERROR_MESSAGE
                    }
                };
                ToolResult::error_message(message)
            }
        }
    }

    pub async fn fetch_details(&self, identifier: &CompanyIdentifier) -> Result<CompanyDetails> {
        let query = QueryBuilder::identifier_query(identifier);
        debug!("Looking up company {} with query {}", identifier, query);

        let body = self.client.search(&query).await?;
        let record = body
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .filter(|record| record.is_object())
            .ok_or(RegistryError::NotFound)?;

        Ok(CompanyDetails::from_record(record, identifier))
    }

    async fn render_details(&self, identifier: &str) -> Result<String> {
        let identifier = CompanyIdentifier::parse(identifier)?;
        let details = self.fetch_details(&identifier).await?;
        let json = serde_json::to_string_pretty(&details)?;

        Ok(format!("{}\n{}", details.title(&identifier), json))
    }
}
