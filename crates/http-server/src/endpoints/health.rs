use axum::response::Json;
use serde_json::Value;

pub const HEALTH_PATH: &str = "/health";

pub async fn health_handler() -> Json<Value> {
    Json(mcp::health_status())
}
