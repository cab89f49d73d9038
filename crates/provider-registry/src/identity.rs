// Principal identities
//
// The registry never authenticates anyone itself; callers hand it identities
// that some outer layer already verified. An identity is therefore nothing
// but an opaque token compared byte-for-byte.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, immutable principal token. Exact equality, no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from any string-like token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the underlying token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Identity {
    fn from(token: String) -> Self {
        Self(token)
    }
}
