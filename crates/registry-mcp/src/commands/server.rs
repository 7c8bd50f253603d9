use anyhow::Result;
use mcp::client_registration::register_local_sse_server;
use mcp::configuration::default_data_directory;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::ServerArgs;
use crate::commands::{build_lookup_service, load_configuration};
use logging::LogMode;

#[derive(Serialize, Deserialize)]
pub struct ServerInfo {
    pub port: u16,
}

pub fn print_server_info(port: u16) -> Result<()> {
    let server_info = ServerInfo { port };
    println!("{}", serde_json::to_string(&server_info)?);
    Ok(())
}

pub async fn run(args: ServerArgs) -> Result<()> {
    let log_dir = match args.log_dir {
        Some(dir) => dir,
        None => default_data_directory()?.join("logs"),
    };
    let mode = if args.json_logs {
        LogMode::ServerJson { log_dir }
    } else {
        LogMode::Server { log_dir }
    };
    let _guards = logging::init(mode, args.verbose)?;

    let configuration = Arc::new(load_configuration(&args.registry)?);
    let lookup_service = Arc::new(build_lookup_service(&configuration)?);

    let port = match args.port {
        Some(port) => port,
        None => http_server::find_unused_port(args.host, http_server::PREFERRED_PORT)?,
    };

    if let Some(mcp_config_path) = args.register_mcp {
        register_local_sse_server(mcp_config_path.clone(), port)?;
        tracing::info!("Registered MCP server in {}", mcp_config_path.display());
    }

    // stdout carries only this line so a launcher can discover the port.
    print_server_info(port)?;

    http_server::run(
        SocketAddr::new(args.host, port),
        lookup_service,
        configuration,
    )
    .await
}
