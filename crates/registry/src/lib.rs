//! Lookup logic for the public French company registry
//! (`recherche-entreprises.api.gouv.fr`).
//!
//! The crate turns structured search requests into query strings, performs a
//! single HTTP GET per operation and reshapes the JSON answer into a
//! [`ToolResult`], the uniform envelope handed back to the MCP layer.

pub mod client;
pub mod details;
pub mod error;
pub mod identifier;
pub mod lookup;
pub mod query;
pub mod result;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::{
    DEFAULT_API_BASE_URL, RegistryClientConfig, RegistryHttpClient, ReqwestRegistryClient,
};
pub use details::CompanyDetails;
pub use error::{ErrorKind, RegistryError};
pub use identifier::CompanyIdentifier;
pub use lookup::{CompanyLookupService, SearchResult};
pub use query::{QueryBuilder, SearchRequest, SortBy, SortOrder};
pub use result::{TextContent, ToolResult};
