use registry::SearchRequest;
use rmcp::model::{ErrorCode, JsonObject};
use serde_json::Value;

use crate::tools::types::RegistryToolInput;

pub struct SearchCompanyInput {
    pub request: SearchRequest,
}

impl TryFrom<JsonObject> for SearchCompanyInput {
    type Error = rmcp::ErrorData;

    fn try_from(params: JsonObject) -> Result<Self, Self::Error> {
        let input = RegistryToolInput::new(params);
        input.get_string("query")?;

        let request = serde_json::from_value(Value::Object(input.params)).map_err(|e| {
            rmcp::ErrorData::new(
                ErrorCode::INVALID_PARAMS,
                format!("Invalid search-company arguments: {e}"),
                None,
            )
        })?;

        Ok(Self { request })
    }
}
