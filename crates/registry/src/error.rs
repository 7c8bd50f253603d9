//! Error types for the registry crate

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// Identifier is neither a SIREN nor a SIRET
    #[error("invalid identifier format")]
    InvalidFormat,

    /// The registry returned no result for a well-formed identifier
    #[error("company not found")]
    NotFound,

    /// Request could not be sent or no response was received
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The registry answered with a non-success status
    #[error("registry answered {status} for {url}")]
    Status { url: String, status: u16 },

    /// The response body is not valid JSON
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// The three failure classes surfaced to tool callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    NotFound,
    Network,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::InvalidFormat => ErrorKind::InvalidFormat,
            RegistryError::NotFound => ErrorKind::NotFound,
            RegistryError::Transport { .. }
            | RegistryError::Status { .. }
            | RegistryError::Decode(_)
            | RegistryError::ClientBuild(_) => ErrorKind::Network,
        }
    }
}
