use std::borrow::Cow;
use std::sync::Arc;

use registry::CompanyLookupService;
use rmcp::model::{CallToolResult, JsonObject, Tool, object};
use serde_json::json;
use tracing::debug;

use super::constants::{
    GET_COMPANY_DETAILS_TOOL_DESCRIPTION, GET_COMPANY_DETAILS_TOOL_NAME, IDENTIFIER_PATTERN,
};
use super::input::GetCompanyDetailsInput;
use crate::tools::types::{RegistryTool, to_call_tool_result};

pub struct GetCompanyDetailsTool {
    lookup_service: Arc<CompanyLookupService>,
}

impl GetCompanyDetailsTool {
    pub fn new(lookup_service: Arc<CompanyLookupService>) -> Self {
        Self { lookup_service }
    }
}

#[async_trait::async_trait]
impl RegistryTool for GetCompanyDetailsTool {
    fn name(&self) -> &str {
        GET_COMPANY_DETAILS_TOOL_NAME
    }

    fn to_mcp_tool(&self) -> Tool {
        let input_schema = json!({
            "type": "object",
            "properties": {
                "identifier": {
                    "type": "string",
                    "description": "SIREN (9 digits) or SIRET (14 digits) identifier",
                    "pattern": IDENTIFIER_PATTERN
                }
            },
            "required": ["identifier"]
        });

        Tool {
            name: Cow::Borrowed(GET_COMPANY_DETAILS_TOOL_NAME),
            description: Some(Cow::Borrowed(GET_COMPANY_DETAILS_TOOL_DESCRIPTION)),
            input_schema: Arc::new(object(input_schema)),
            output_schema: None,
            annotations: None,
        }
    }

    async fn call(&self, params: JsonObject) -> Result<CallToolResult, rmcp::ErrorData> {
        let input = GetCompanyDetailsInput::from(params);
        debug!("get-company-details called for {:?}", input.identifier);

        let result = self.lookup_service.get_details(&input.identifier).await;
        Ok(to_call_tool_result(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::testing::{StubRegistryClient, StubResponse};
    use serde_json::Value;

    fn create_tool(client: Arc<StubRegistryClient>) -> GetCompanyDetailsTool {
        GetCompanyDetailsTool::new(Arc::new(CompanyLookupService::new(client)))
    }

    fn first_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    fn carrefour_body() -> Value {
        json!({
            "page": 1,
            "total_pages": 1,
            "results": [{
                "siren": "123456789",
                "nom_complet": "CARREFOUR",
                "nom_raison_sociale": "CARREFOUR",
                "siege": {
                    "siret": "12345678901234",
                    "tva_intra": "FR12345678901",
                    "code_postal": "75015"
                },
                "etat_administratif": "A",
                "date_creation": "1959-01-01",
                "date_mise_a_jour": "2022-01-01",
                "activite_principale": "47.11F",
                "tranche_effectif_salarie": "53",
                "categorie_entreprise": "GE",
                "dirigeants": [{ "nom": "DOE", "prenoms": "John", "qualite": "PRESIDENT" }],
                "matching_etablissements": [
                    { "siret": "12345678901234", "code_postal": "75015", "est_siege": true },
                    { "siret": "12345678902345", "code_postal": "69001", "est_siege": false }
                ]
            }]
        })
    }

    #[test]
    fn test_schema_pattern() {
        let tool = create_tool(Arc::new(StubRegistryClient::empty())).to_mcp_tool();

        assert_eq!(tool.name, GET_COMPANY_DETAILS_TOOL_NAME);
        let schema = Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["properties"]["identifier"]["pattern"], IDENTIFIER_PATTERN);
        assert_eq!(schema["required"], json!(["identifier"]));
    }

    #[tokio::test]
    async fn test_call_by_siren() {
        let client = Arc::new(StubRegistryClient::new(carrefour_body()));
        let tool = create_tool(client);

        let result = tool
            .call(object(json!({ "identifier": "123456789" })))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let text = first_text(&result);
        assert!(text.starts_with("Company details: CARREFOUR\n"));
        assert!(text.contains("\"siren\": \"123456789\""));
        assert!(text.contains("\"legal_name\": \"CARREFOUR\""));
        assert!(text.contains("\"administrative_state\": \"A\""));
        assert!(text.contains("\"primary_code\": \"47.11F\""));
        assert!(text.contains("\"directors\":"));
        assert!(text.contains("\"establishments\":"));
    }

    #[tokio::test]
    async fn test_call_by_siret() {
        let client = Arc::new(StubRegistryClient::new(carrefour_body()));
        let tool = create_tool(client);

        let result = tool
            .call(object(json!({ "identifier": "12345678901234" })))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert!(first_text(&result).starts_with("Company details: CARREFOUR - 75015\n"));
    }

    #[tokio::test]
    async fn test_call_network_error() {
        let client = Arc::new(StubRegistryClient::new(carrefour_body()));
        client.push_response(StubResponse::NetworkError);
        let tool = create_tool(client);

        let result = tool
            .call(object(json!({ "identifier": "999999999" })))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), r#"{"message":"Network Error"}"#);
    }

    #[tokio::test]
    async fn test_call_without_identifier_is_invalid_format() {
        let client = Arc::new(StubRegistryClient::new(carrefour_body()));
        let tool = create_tool(client.clone());

        let result = tool.call(JsonObject::new()).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), r#"{"message":"invalid identifier format"}"#);
        assert!(client.queries().is_empty());
    }
}
