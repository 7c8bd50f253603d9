use std::borrow::Cow;
use std::sync::Arc;

use registry::CompanyLookupService;
use rmcp::model::{CallToolResult, JsonObject, Tool, object};
use serde_json::json;
use tracing::debug;

use super::constants::{SEARCH_COMPANY_TOOL_DESCRIPTION, SEARCH_COMPANY_TOOL_NAME};
use super::input::SearchCompanyInput;
use crate::tools::types::{RegistryTool, to_call_tool_result};

pub struct SearchCompanyTool {
    lookup_service: Arc<CompanyLookupService>,
}

impl SearchCompanyTool {
    pub fn new(lookup_service: Arc<CompanyLookupService>) -> Self {
        Self { lookup_service }
    }
}

#[async_trait::async_trait]
impl RegistryTool for SearchCompanyTool {
    fn name(&self) -> &str {
        SEARCH_COMPANY_TOOL_NAME
    }

    fn to_mcp_tool(&self) -> Tool {
        let input_schema = json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search terms (company name, director, address, etc.)"
                },
                "page": {
                    "type": "integer",
                    "description": "Page number (default: 1)",
                    "default": 1
                },
                "per_page": {
                    "type": "integer",
                    "description": "Number of results per page (default: 10, max: 20)",
                    "default": 10
                },
                "postal_code": {
                    "type": "string",
                    "description": "Postal code used to filter results"
                },
                "naf_code": {
                    "type": "string",
                    "description": "NAF activity code used to filter results"
                },
                "creation_date_min": {
                    "type": "string",
                    "description": "Earliest creation date (format: YYYY-MM-DD)"
                },
                "creation_date_max": {
                    "type": "string",
                    "description": "Latest creation date (format: YYYY-MM-DD)"
                },
                "legal_status": {
                    "type": "string",
                    "description": "Legal status (e.g. SA, SAS, SARL)"
                },
                "employee_range": {
                    "type": "string",
                    "description": "Employee range (e.g. 0-9, 10-19, 20-49)"
                },
                "company_category": {
                    "type": "string",
                    "description": "Company category (e.g. PME, GE, ETI)"
                },
                "sort_by": {
                    "type": "string",
                    "description": "Sort criterion",
                    "enum": ["score", "creation_date", "name"]
                },
                "sort_order": {
                    "type": "string",
                    "description": "Sort order",
                    "enum": ["asc", "desc"],
                    "default": "desc"
                }
            },
            "required": ["query"]
        });

        Tool {
            name: Cow::Borrowed(SEARCH_COMPANY_TOOL_NAME),
            description: Some(Cow::Borrowed(SEARCH_COMPANY_TOOL_DESCRIPTION)),
            input_schema: Arc::new(object(input_schema)),
            output_schema: None,
            annotations: None,
        }
    }

    async fn call(&self, params: JsonObject) -> Result<CallToolResult, rmcp::ErrorData> {
        let input = SearchCompanyInput::try_from(params)?;
        debug!("search-company called with {:?}", input.request);

        let result = self.lookup_service.search(&input.request).await;
        Ok(to_call_tool_result(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::testing::{StubRegistryClient, StubResponse};
    use serde_json::Value;

    fn create_tool(client: Arc<StubRegistryClient>) -> SearchCompanyTool {
        SearchCompanyTool::new(Arc::new(CompanyLookupService::new(client)))
    }

    fn first_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_schema() {
        let tool = create_tool(Arc::new(StubRegistryClient::empty())).to_mcp_tool();

        assert_eq!(tool.name, SEARCH_COMPANY_TOOL_NAME);
        let schema = Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(
            schema["properties"]["sort_by"]["enum"],
            json!(["score", "creation_date", "name"])
        );
        assert_eq!(schema["properties"]["sort_order"]["default"], "desc");
        assert_eq!(schema["properties"]["page"]["type"], "integer");
        assert_eq!(schema["properties"]["per_page"]["type"], "integer");
    }

    #[tokio::test]
    async fn test_call_forwards_filters() {
        let client = Arc::new(StubRegistryClient::new(json!({
            "page": 1,
            "total_pages": 1,
            "results": [{ "siren": "652014051" }]
        })));
        let tool = create_tool(client.clone());

        let result = tool
            .call(object(json!({
                "query": "Carrefour",
                "postal_code": "75015",
                "legal_status": "SA"
            })))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert!(first_text(&result).starts_with("Search results (page 1 of 1):"));
        assert_eq!(
            client.last_query().as_deref(),
            Some("q=Carrefour&page=1&per_page=10&postal_code=75015&legal_status=SA")
        );
    }

    #[tokio::test]
    async fn test_call_reports_network_failure_as_tool_error() {
        let client = Arc::new(StubRegistryClient::empty());
        client.push_response(StubResponse::NetworkError);
        let tool = create_tool(client);

        let result = tool
            .call(object(json!({ "query": "Carrefour" })))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let payload: Value = serde_json::from_str(&first_text(&result)).unwrap();
        assert!(payload["message"].is_string());
    }

    #[tokio::test]
    async fn test_call_without_query_is_a_protocol_error() {
        let client = Arc::new(StubRegistryClient::empty());
        let tool = create_tool(client.clone());

        let result = tool.call(JsonObject::new()).await;

        assert!(result.is_err());
        assert!(client.queries().is_empty());
    }
}
