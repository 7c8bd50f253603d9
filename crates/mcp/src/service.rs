use std::sync::Arc;

use crate::MCP_NAME;
use crate::configuration::McpConfiguration;
use crate::tools::AvailableToolsService;
use registry::CompanyLookupService;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
    InitializeResult, ListToolsResult, PaginatedRequestParam, ServerCapabilities,
    ToolsCapability,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use tracing::{debug, info};

/// One instance per MCP connection. Holds no connection state of its own.
pub struct DefaultMcpService {
    available_tools_service: AvailableToolsService,
}

impl DefaultMcpService {
    pub fn new(
        lookup_service: Arc<CompanyLookupService>,
        configuration: Arc<McpConfiguration>,
    ) -> Self {
        Self {
            available_tools_service: AvailableToolsService::new(lookup_service, configuration),
        }
    }

    fn server_info() -> Implementation {
        Implementation {
            name: MCP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            tools: Some(ToolsCapability {
                list_changed: Some(true),
            }),
            ..Default::default()
        }
    }
}

impl ServerHandler for DefaultMcpService {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        info!(
            "MCP client {} {} connected",
            request.client_info.name, request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: request.protocol_version,
            capabilities: Self::capabilities(),
            server_info: Self::server_info(),
            instructions: None,
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.available_tools_service.get_available_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(
            "Tool call {} with arguments {:?}",
            request.name, request.arguments
        );

        self.available_tools_service
            .call_tool(request.name.as_ref(), request.arguments.unwrap_or_default())
            .await
    }
}
