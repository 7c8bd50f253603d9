use async_trait::async_trait;
use registry::ToolResult;
use rmcp::model::{CallToolResult, Content, ErrorCode, JsonObject, Tool};

#[async_trait]
pub trait RegistryTool: Send + Sync {
    fn name(&self) -> &str;
    fn to_mcp_tool(&self) -> Tool;
    async fn call(&self, params: JsonObject) -> Result<CallToolResult, rmcp::ErrorData>;
}

pub struct RegistryToolInput {
    pub params: JsonObject,
}

impl RegistryToolInput {
    pub fn new(params: JsonObject) -> Self {
        Self { params }
    }

    pub fn get_string(&self, key: &str) -> Result<&str, rmcp::ErrorData> {
        self.params
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or(rmcp::ErrorData::new(
                ErrorCode::INVALID_PARAMS,
                format!("Missing string parameter: {key}"),
                None,
            ))
    }

    pub fn get_string_optional(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(|v| v.as_str())
    }
}

pub fn to_call_tool_result(result: ToolResult) -> CallToolResult {
    let is_error = result.is_error;
    let content = result
        .content
        .into_iter()
        .map(|block| Content::text(block.text))
        .collect();

    if is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}
