use crate::{configuration::McpConfiguration, service::DefaultMcpService};
use registry::CompanyLookupService;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use std::sync::Arc;

pub fn mcp_http_service(
    lookup_service: Arc<CompanyLookupService>,
    configuration: Arc<McpConfiguration>,
) -> StreamableHttpService<DefaultMcpService> {
    StreamableHttpService::new(
        move || {
            Ok(DefaultMcpService::new(
                Arc::clone(&lookup_service),
                Arc::clone(&configuration),
            ))
        },
        Arc::new(LocalSessionManager::default()),
        Default::default(),
    )
}
