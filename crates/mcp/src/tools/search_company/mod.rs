pub mod constants;
pub mod input;
pub mod tool;

pub use constants::SEARCH_COMPANY_TOOL_NAME;
pub use tool::SearchCompanyTool;
