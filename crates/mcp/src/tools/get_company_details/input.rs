use rmcp::model::JsonObject;

use crate::tools::types::RegistryToolInput;

pub struct GetCompanyDetailsInput {
    pub identifier: String,
}

// A missing identifier is left for the lookup to reject as malformed.
impl From<JsonObject> for GetCompanyDetailsInput {
    fn from(params: JsonObject) -> Self {
        let input = RegistryToolInput::new(params);
        let identifier = input
            .get_string_optional("identifier")
            .unwrap_or_default()
            .to_string();

        Self { identifier }
    }
}
