pub mod constants;
pub mod input;
pub mod tool;

pub use constants::GET_COMPANY_DETAILS_TOOL_NAME;
pub use tool::GetCompanyDetailsTool;
