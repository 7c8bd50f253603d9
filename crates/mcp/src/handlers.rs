use crate::MCP_NAME;

pub fn health_status() -> serde_json::Value {
    serde_json::json!({
        "status": "healthy",
        "service": MCP_NAME,
        "version": env!("CARGO_PKG_VERSION")
    })
}
