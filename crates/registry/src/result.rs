use serde::{Deserialize, Serialize};

/// Text content for a tool response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// The type of the content, always "text".
    pub r#type: String,
    pub text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            r#type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Envelope returned by every lookup operation, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub is_error: bool,
    pub content: Vec<TextContent>,
}

impl ToolResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            content: vec![TextContent::new(text)],
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            content: vec![TextContent::new(text)],
        }
    }

    /// Error whose text is `{"message": <message>}`.
    pub fn error_message(message: &str) -> Self {
        Self::error(serde_json::json!({ "message": message }).to_string())
    }

    /// Text of the first content block, empty when there is none.
    pub fn text(&self) -> &str {
        self.content
            .first()
            .map(|content| content.text.as_str())
            .unwrap_or_default()
    }
}
