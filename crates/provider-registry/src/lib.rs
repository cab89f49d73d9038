// Provider Registry - access-controlled verification registry
//
// Tracks the verification status of provider identities under the exclusive
// authority of a single administrator identity. Callers arrive already
// authenticated; signature checking, persistence, and transport belong to the
// host environment.

// ================================
// Module Declarations
// ================================

/// Logical clock capability for verification heights
pub mod clock;

/// Shared directory surface for concurrent hosts
pub mod directory;

/// Registry error types
pub mod error;

/// Principal identities
pub mod identity;

/// Verification records and the admin-gated registry
pub mod providers;

// ================================
// Public API Re-exports
// ================================

pub use clock::{BlockClock, ManualClock, SystemClock};
pub use directory::{ProviderDirectory, SharedProviderRegistry};
pub use error::{RegistryError, Result};
pub use identity::Identity;
pub use providers::{ProviderRegistry, RegistryConfig, VerificationRecord};

// ================================
// Registry Constants
// ================================

/// Current registry format version
pub const REGISTRY_VERSION: &str = "0.1.0";

// ================================
// Convenience Functions
// ================================

/// Create a registry stamped by the wall clock
pub fn create_registry(admin: Identity) -> ProviderRegistry {
    ProviderRegistry::new(
        RegistryConfig { admin },
        std::sync::Arc::new(SystemClock),
    )
}

/// Create a shared registry for concurrent callers, stamped by the wall clock
pub fn create_shared_registry(admin: Identity) -> SharedProviderRegistry {
    SharedProviderRegistry::new(
        RegistryConfig { admin },
        std::sync::Arc::new(SystemClock),
    )
}

// ================================
// Tests
// ================================
