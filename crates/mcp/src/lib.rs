pub mod client_registration;
pub mod configuration;
pub mod handlers;
pub mod http;
pub mod service;
pub mod sse;
pub mod tools;

pub use handlers::*;

pub const MCP_NAME: &str = "company-registry";
pub const MCP_SSE_PATH: &str = "/sse";
pub const MCP_MESSAGES_PATH: &str = "/messages";
