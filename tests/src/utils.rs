// Common utilities for provider registry tests
use provider_registry::{
    BlockClock, Identity, ManualClock, ProviderRegistry, RegistryConfig, SharedProviderRegistry,
};
use std::sync::Arc;

/// Common test setup: one admin, two provider principals
pub struct TestContext {
    pub admin: Identity,
    pub provider: Identity,
    pub other_provider: Identity,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            admin: test_identity("admin"),
            provider: test_identity("provider-1"),
            other_provider: test_identity("provider-2"),
        }
    }
}

/// Generate a deterministic test identity from a seed
pub fn test_identity(seed: &str) -> Identity {
    Identity::new(format!("principal-{seed}"))
}

/// Registry driven by a manual clock, starting at `height`
pub fn test_registry(admin: &Identity, height: u64) -> (ProviderRegistry, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(height));
    let registry = ProviderRegistry::new(
        RegistryConfig {
            admin: admin.clone(),
        },
        clock.clone() as Arc<dyn BlockClock>,
    );
    (registry, clock)
}

/// Shared registry driven by a manual clock, starting at `height`
pub fn test_shared_registry(
    admin: &Identity,
    height: u64,
) -> (Arc<SharedProviderRegistry>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(height));
    let registry = Arc::new(SharedProviderRegistry::new(
        RegistryConfig {
            admin: admin.clone(),
        },
        clock.clone() as Arc<dyn BlockClock>,
    ));
    (registry, clock)
}

/// Install the env-filter subscriber once for log-capture runs
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
