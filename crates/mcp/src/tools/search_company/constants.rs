pub const SEARCH_COMPANY_TOOL_NAME: &str = "search-company";
pub const SEARCH_COMPANY_TOOL_DESCRIPTION: &str = r#"Search French companies in the public company registry, with optional filters.

Behavior:
- Matches the query against company names, directors and addresses.
- Returns one page of results (page 1 and 10 results per page by default).
- Results are returned as received from the registry.

Example:
{ "query": "Carrefour", "postal_code": "75015", "legal_status": "SA" }"#;
