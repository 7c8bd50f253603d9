//! Registers the running server in an MCP client configuration file
//! (the `mcpServers` map used by most MCP clients).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{MAIN_SEPARATOR, PathBuf};

use crate::{MCP_NAME, MCP_SSE_PATH};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SseServerEntry {
    #[serde(rename = "type")]
    pub transport_type: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Default)]
struct McpClientConfig {
    #[serde(skip)]
    path: PathBuf,

    // Other clients' entries are kept verbatim.
    #[serde(rename = "mcpServers", default)]
    mcp_servers: Map<String, Value>,

    #[serde(flatten)]
    other: Map<String, Value>,
}

impl McpClientConfig {
    fn get_or_create(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            return Ok(Self {
                path,
                ..Default::default()
            });
        }

        let content = fs::read_to_string(&path)?;
        let config: McpClientConfig = serde_json::from_str(&content)?;

        Ok(Self { path, ..config })
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

pub fn local_sse_url(port: u16) -> String {
    format!("http://localhost:{port}{MCP_SSE_PATH}")
}

pub fn register_local_sse_server(mcp_config_path: PathBuf, port: u16) -> Result<()> {
    let expanded_path = expand_home(mcp_config_path)?;
    let mut config = McpClientConfig::get_or_create(expanded_path)?;

    let entry = SseServerEntry {
        transport_type: "sse".to_string(),
        url: local_sse_url(port),
    };
    let entry = serde_json::to_value(entry)?;

    if config.mcp_servers.get(MCP_NAME) == Some(&entry) {
        return Ok(());
    }

    config.mcp_servers.insert(MCP_NAME.to_string(), entry);
    config.save()
}

// Expands a leading `~` to the home directory.
fn expand_home(path: PathBuf) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if let Some(without_tilde) = path_str.strip_prefix('~')
        && (without_tilde.is_empty() || without_tilde.starts_with(MAIN_SEPARATOR))
    {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory."))?;
        return Ok(home.join(without_tilde.trim_start_matches(MAIN_SEPARATOR)));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_json(path: &std::path::Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_register_in_new_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("mcp.json");

        register_local_sse_server(path.clone(), 3001).unwrap();

        let json = read_json(&path);
        assert_eq!(json["mcpServers"][MCP_NAME]["type"], "sse");
        assert_eq!(
            json["mcpServers"][MCP_NAME]["url"],
            "http://localhost:3001/sse"
        );
    }

    #[test]
    fn test_existing_servers_are_unaffected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mcp.json");
        fs::write(
            &path,
            r#"{"theme":"dark","mcpServers":{"other":{"command":"npx","args":["other-server"]}}}"#,
        )
        .unwrap();

        register_local_sse_server(path.clone(), 4000).unwrap();

        let json = read_json(&path);
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["mcpServers"]["other"]["command"], "npx");
        assert_eq!(
            json["mcpServers"][MCP_NAME]["url"],
            "http://localhost:4000/sse"
        );
    }

    #[test]
    fn test_overwrites_stale_port() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mcp.json");

        register_local_sse_server(path.clone(), 4000).unwrap();
        register_local_sse_server(path.clone(), 4001).unwrap();

        let json = read_json(&path);
        assert_eq!(
            json["mcpServers"][MCP_NAME]["url"],
            "http://localhost:4001/sse"
        );
    }

    #[test]
    fn test_invalid_existing_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mcp.json");
        fs::write(&path, "not json").unwrap();

        assert!(register_local_sse_server(path, 4000).is_err());
    }

    #[test]
    fn test_expand_regular_path() {
        let path = PathBuf::from("/tmp/mcp.json");
        assert_eq!(expand_home(path.clone()).unwrap(), path);
    }

    #[cfg(unix)]
    #[test]
    fn test_expand_tilde_path() {
        let expanded = expand_home(PathBuf::from("~/.config/mcp.json")).unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with(".config/mcp.json"));
    }
}
