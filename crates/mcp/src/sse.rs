use crate::{
    MCP_MESSAGES_PATH, MCP_SSE_PATH, configuration::McpConfiguration, service::DefaultMcpService,
};
use axum::Router;
use registry::CompanyLookupService;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::{net::SocketAddr, sync::Arc};
use tokio_util::sync::CancellationToken;

/// SSE transport: `GET /sse` opens a stream, `POST /messages` carries the
/// client messages. Each connection gets its own service instance.
pub fn mcp_sse_router(
    bind: SocketAddr,
    lookup_service: Arc<CompanyLookupService>,
    configuration: Arc<McpConfiguration>,
) -> (Router, CancellationToken) {
    let (sse_server, router) = SseServer::new(SseServerConfig {
        bind,
        sse_path: MCP_SSE_PATH.to_string(),
        post_path: MCP_MESSAGES_PATH.to_string(),
        ct: CancellationToken::new(),
        sse_keep_alive: None,
    });

    let cancellation_token = sse_server.config.ct.child_token();

    sse_server.with_service(move || {
        DefaultMcpService::new(Arc::clone(&lookup_service), Arc::clone(&configuration))
    });

    (router, cancellation_token)
}
