use axum::response::Json;
use serde::{Deserialize, Serialize};

pub const INFO_PATH: &str = "/info";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ServerInfoResponse {
    pub port: u16,
}

/// Returns the port the server actually bound, which may differ from the
/// preferred one.
pub async fn info_handler(port: u16) -> Json<ServerInfoResponse> {
    Json(ServerInfoResponse { port })
}
