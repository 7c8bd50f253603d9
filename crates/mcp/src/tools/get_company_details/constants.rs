pub const GET_COMPANY_DETAILS_TOOL_NAME: &str = "get-company-details";
pub const GET_COMPANY_DETAILS_TOOL_DESCRIPTION: &str = r#"Get the full record of a French company from its SIREN (9 digits) or SIRET (14 digits).

Returns:
- Identification: SIREN, SIRET, full name, legal name, VAT number
- Status: administrative state, creation date, last update
- Activity: primary activity code, employee range, company category
- Directors
- Head office
- Matching establishments"#;
pub const IDENTIFIER_PATTERN: &str = "^[0-9]{9}([0-9]{5})?$";
