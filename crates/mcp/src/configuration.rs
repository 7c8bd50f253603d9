use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use registry::{DEFAULT_API_BASE_URL, RegistryClientConfig};
use serde::{Deserialize, Serialize};

pub const MCP_CONFIGURATION_FILE_NAME: &str = "mcp.settings.json";
const DATA_DIRECTORY_NAME: &str = "company-registry-mcp";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct McpConfiguration {
    pub disabled_tools: HashSet<String>,
    pub api_base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl McpConfiguration {
    pub fn new() -> Self {
        Self {
            disabled_tools: HashSet::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }

    pub fn is_tool_enabled(&self, tool_name: &str) -> bool {
        !self.disabled_tools.contains(tool_name)
    }

    pub fn registry_client_config(&self) -> RegistryClientConfig {
        RegistryClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..Default::default()
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for McpConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

/// `<system data dir>/company-registry-mcp`, created on demand.
pub fn default_data_directory() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine the system data directory"))?
        .join(DATA_DIRECTORY_NAME);
    fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

pub fn read_mcp_configuration(path: PathBuf) -> McpConfiguration {
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "Could not read MCP configuration at {}: {}. Returning default configuration.",
                path.display(),
                e
            );
            return McpConfiguration::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(configuration) => configuration,
        Err(e) => {
            warn!(
                "Could not parse MCP configuration: {}. Returning default configuration.",
                e
            );
            McpConfiguration::default()
        }
    }
}

pub fn get_or_create_mcp_configuration(data_directory: &Path) -> McpConfiguration {
    if !data_directory.exists() {
        warn!("Data directory does not exist, returning default MCP configuration.");
        return McpConfiguration::default();
    }

    let configuration_path = data_directory.join(MCP_CONFIGURATION_FILE_NAME);

    if !configuration_path.exists() {
        let new_configuration = McpConfiguration::default();
        if let Err(e) = new_configuration.save(&configuration_path) {
            warn!(
                "Could not save MCP configuration: {}. Returning default configuration.",
                e
            );
            return McpConfiguration::default();
        }

        info!(
            "Created new MCP configuration file at {}.",
            configuration_path.display()
        );
        return new_configuration;
    }

    read_mcp_configuration(configuration_path)
}
