pub mod lookup;
pub mod server;

use anyhow::Result;
use mcp::configuration::{
    McpConfiguration, default_data_directory, get_or_create_mcp_configuration,
    read_mcp_configuration,
};
use registry::{CompanyLookupService, ReqwestRegistryClient};
use std::sync::Arc;

use crate::cli::RegistryArgs;

/// Settings file first, then command-line overrides.
pub fn load_configuration(args: &RegistryArgs) -> Result<McpConfiguration> {
    let configuration = match &args.mcp_configuration_path {
        Some(path) => read_mcp_configuration(path.clone()),
        None => get_or_create_mcp_configuration(&default_data_directory()?),
    };
    Ok(apply_overrides(configuration, args))
}

fn apply_overrides(mut configuration: McpConfiguration, args: &RegistryArgs) -> McpConfiguration {
    if let Some(api_base_url) = &args.api_base_url {
        configuration.api_base_url = api_base_url.clone();
    }
    if let Some(timeout) = args.request_timeout_secs {
        configuration.request_timeout_secs = Some(timeout);
    }
    configuration
}

pub fn build_lookup_service(configuration: &McpConfiguration) -> Result<CompanyLookupService> {
    let client = ReqwestRegistryClient::new(configuration.registry_client_config())?;
    Ok(CompanyLookupService::new(Arc::new(client)))
}
