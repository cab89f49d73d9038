// Registry error types for the provider verification surface

use crate::identity::Identity;
use thiserror::Error;

/// Registry error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unauthorized sender: {sender}")]
    Unauthorized { sender: Identity },

    #[error("Provider already registered: {provider}")]
    AlreadyExists { provider: Identity },

    #[error("Provider not found: {provider}")]
    NotFound { provider: Identity },
}

impl RegistryError {
    /// Stable numeric code for hosts that surface errors on a wire.
    pub fn code(&self) -> u16 {
        match self {
            RegistryError::Unauthorized { .. } => 403,
            RegistryError::AlreadyExists { .. } => 400,
            RegistryError::NotFound { .. } => 404,
        }
    }
}

/// Registry result type
pub type Result<T> = std::result::Result<T, RegistryError>;
