pub mod available_tools_service;
pub mod get_company_details;
pub mod search_company;
pub mod types;

pub use available_tools_service::*;
