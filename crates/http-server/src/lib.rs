pub mod endpoints;

use crate::endpoints::{
    health::{HEALTH_PATH, health_handler},
    info::{INFO_PATH, info_handler},
};

use anyhow::Result;
use axum::http::HeaderValue;
use axum::{Router, routing::get};
use mcp::configuration::McpConfiguration;
use mcp::{http::mcp_http_service, sse::mcp_sse_router};
use registry::CompanyLookupService;
use std::net::{IpAddr, SocketAddr, TcpListener};
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const PREFERRED_PORT: u16 = 3001;

/// Builds the application router. The returned token stops the SSE
/// transport's background sessions.
pub fn app(
    addr: SocketAddr,
    lookup_service: Arc<CompanyLookupService>,
    configuration: Arc<McpConfiguration>,
) -> (Router, CancellationToken) {
    let cors_layer = CorsLayer::new().allow_origin(AllowOrigin::predicate(
        |origin: &HeaderValue, _| is_localhost_origin(origin),
    ));

    let mcp_http_router =
        mcp_http_service(Arc::clone(&lookup_service), Arc::clone(&configuration));
    let (mcp_sse_router, mcp_sse_cancellation_token) =
        mcp_sse_router(addr, lookup_service, configuration);

    let port = addr.port();
    let app = Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .route(INFO_PATH, get(move || info_handler(port)))
        .nest_service("/mcp", mcp_http_router)
        .merge(mcp_sse_router)
        .layer(ServiceBuilder::new().layer(cors_layer));

    (app, mcp_sse_cancellation_token)
}

pub async fn run(
    addr: SocketAddr,
    lookup_service: Arc<CompanyLookupService>,
    configuration: Arc<McpConfiguration>,
) -> Result<()> {
    let (app, mcp_sse_cancellation_token) = app(addr, lookup_service, configuration);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("MCP server listening on {}", addr);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    mcp_sse_cancellation_token.cancel();
    tracing::info!("MCP server shut down gracefully");

    result.map_err(Into::into)
}

fn is_localhost_origin(origin: &HeaderValue) -> bool {
    if let Ok(origin_str) = origin.to_str()
        && let Ok(uri) = origin_str.parse::<http::Uri>()
    {
        return uri.host() == Some("localhost");
    }
    false
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

/// Returns `preferred` when it is free on `host`, otherwise any free port.
pub fn find_unused_port(host: IpAddr, preferred: u16) -> Result<u16> {
    match TcpListener::bind((host, preferred)) {
        Ok(listener) => Ok(listener.local_addr()?.port()),
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            tracing::info!(
                "Preferred port {} is busy, finding a random unused port",
                preferred
            );
            let listener = TcpListener::bind((host, 0))?;
            Ok(listener.local_addr()?.port())
        }
        Err(e) => {
            tracing::error!("Error finding unused port: {e}");
            Err(e.into())
        }
    }
}
