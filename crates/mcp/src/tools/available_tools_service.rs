use std::collections::HashMap;
use std::sync::Arc;

use registry::CompanyLookupService;
use rmcp::model::{CallToolResult, ErrorCode, JsonObject, Tool};
use tracing::debug;

use crate::configuration::McpConfiguration;
use crate::tools::get_company_details::GetCompanyDetailsTool;
use crate::tools::search_company::SearchCompanyTool;
use crate::tools::types::RegistryTool;

pub struct AvailableToolsService {
    tools: HashMap<String, Box<dyn RegistryTool>>,
}

impl AvailableToolsService {
    pub fn new(
        lookup_service: Arc<CompanyLookupService>,
        configuration: Arc<McpConfiguration>,
    ) -> Self {
        let mut service = Self {
            tools: HashMap::new(),
        };

        service.register(
            Box::new(SearchCompanyTool::new(Arc::clone(&lookup_service))),
            &configuration,
        );
        service.register(
            Box::new(GetCompanyDetailsTool::new(Arc::clone(&lookup_service))),
            &configuration,
        );

        service
    }

    fn register(&mut self, tool: Box<dyn RegistryTool>, configuration: &McpConfiguration) {
        if !configuration.is_tool_enabled(tool.name()) {
            debug!("Tool {} is disabled by configuration", tool.name());
            return;
        }
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get_available_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self.tools.values().map(|tool| tool.to_mcp_tool()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub async fn call_tool(
        &self,
        tool_name: &str,
        params: JsonObject,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        self.tools
            .get(tool_name)
            .ok_or(rmcp::ErrorData::new(
                ErrorCode::INVALID_PARAMS,
                format!("Tool {tool_name} not found."),
                None,
            ))?
            .call(params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::get_company_details::GET_COMPANY_DETAILS_TOOL_NAME;
    use crate::tools::search_company::SEARCH_COMPANY_TOOL_NAME;
    use registry::testing::StubRegistryClient;
    use rmcp::model::object;
    use serde_json::json;

    fn create_service(configuration: McpConfiguration) -> AvailableToolsService {
        let client = Arc::new(StubRegistryClient::empty());
        AvailableToolsService::new(
            Arc::new(CompanyLookupService::new(client)),
            Arc::new(configuration),
        )
    }

    #[test]
    fn test_lists_both_tools() {
        let service = create_service(McpConfiguration::default());

        let names: Vec<String> = service
            .get_available_tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                GET_COMPANY_DETAILS_TOOL_NAME.to_string(),
                SEARCH_COMPANY_TOOL_NAME.to_string()
            ]
        );
    }

    #[test]
    fn test_disabled_tools_are_not_registered() {
        let mut configuration = McpConfiguration::default();
        configuration
            .disabled_tools
            .insert(SEARCH_COMPANY_TOOL_NAME.to_string());
        let service = create_service(configuration);

        let tools = service.get_available_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, GET_COMPANY_DETAILS_TOOL_NAME);
    }

    #[tokio::test]
    async fn test_dispatches_by_name() {
        let service = create_service(McpConfiguration::default());

        let result = service
            .call_tool(
                GET_COMPANY_DETAILS_TOOL_NAME,
                object(json!({ "identifier": "111111111" })),
            )
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let service = create_service(McpConfiguration::default());

        let error = service
            .call_tool("unknown-tool", JsonObject::new())
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(error.message, "Tool unknown-tool not found.");
    }
}
