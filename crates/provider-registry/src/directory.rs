// Shared provider directory for concurrent hosts
//
// The core `ProviderRegistry` is a sequential state machine. Hosts that field
// concurrent callers go through this wrapper: one lock serializes every
// check-then-mutate, while lookups share read access and always observe a
// fully applied state.

use crate::clock::BlockClock;
use crate::error::{RegistryError, Result};
use crate::identity::Identity;
use crate::providers::{ProviderRegistry, RegistryConfig, VerificationRecord};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

// ================================
// Provider Directory Trait
// ================================

#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    /// Whether `provider` currently holds a verification record
    async fn is_provider_verified(&self, provider: &Identity) -> bool;

    /// Verification record for `provider`, if any
    async fn get_provider_details(&self, provider: &Identity) -> Option<VerificationRecord>;

    /// Register a new provider as verified (admin only)
    async fn add_provider(
        &self,
        sender: &Identity,
        provider: Identity,
        name: String,
        license_number: String,
        specialty: String,
    ) -> Result<()>;

    /// Delete a provider's verification record (admin only)
    async fn revoke_provider(&self, sender: &Identity, provider: &Identity) -> Result<()>;

    /// Replace an existing provider's record wholesale (admin only)
    async fn update_provider(
        &self,
        sender: &Identity,
        provider: &Identity,
        name: String,
        license_number: String,
        specialty: String,
    ) -> Result<()>;

    /// Hand admin authority to `new_admin` (admin only)
    async fn transfer_admin(&self, sender: &Identity, new_admin: Identity) -> Result<()>;
}

// ================================
// Shared In-Memory Registry
// ================================

pub struct SharedProviderRegistry {
    inner: RwLock<ProviderRegistry>,
}

impl SharedProviderRegistry {
    pub fn new(config: RegistryConfig, clock: Arc<dyn BlockClock>) -> Self {
        Self {
            inner: RwLock::new(ProviderRegistry::new(config, clock)),
        }
    }

    /// Identity currently holding admin authority
    pub fn admin(&self) -> Identity {
        self.inner.read().unwrap().admin().clone()
    }

    /// Number of registered providers
    pub fn provider_count(&self) -> usize {
        self.inner.read().unwrap().provider_count()
    }
}

#[async_trait]
impl ProviderDirectory for SharedProviderRegistry {
    async fn is_provider_verified(&self, provider: &Identity) -> bool {
        self.inner.read().unwrap().is_provider_verified(provider)
    }

    async fn get_provider_details(&self, provider: &Identity) -> Option<VerificationRecord> {
        self.inner.read().unwrap().get_provider_details(provider).cloned()
    }

    async fn add_provider(
        &self,
        sender: &Identity,
        provider: Identity,
        name: String,
        license_number: String,
        specialty: String,
    ) -> Result<()> {
        let target = provider.clone();
        let result = self.inner.write().unwrap().add_provider(
            sender,
            provider,
            name,
            license_number,
            specialty,
        );
        log_mutation("add_provider", sender, &target, &result);
        result
    }

    async fn revoke_provider(&self, sender: &Identity, provider: &Identity) -> Result<()> {
        let result = self.inner.write().unwrap().revoke_provider(sender, provider);
        log_mutation("revoke_provider", sender, provider, &result);
        result
    }

    async fn update_provider(
        &self,
        sender: &Identity,
        provider: &Identity,
        name: String,
        license_number: String,
        specialty: String,
    ) -> Result<()> {
        let result = self.inner.write().unwrap().update_provider(
            sender,
            provider,
            name,
            license_number,
            specialty,
        );
        log_mutation("update_provider", sender, provider, &result);
        result
    }

    async fn transfer_admin(&self, sender: &Identity, new_admin: Identity) -> Result<()> {
        let target = new_admin.clone();
        let result = self.inner.write().unwrap().transfer_admin(sender, new_admin);
        log_mutation("transfer_admin", sender, &target, &result);
        result
    }
}

fn log_mutation(operation: &str, sender: &Identity, target: &Identity, result: &Result<()>) {
    match result {
        Ok(()) => info!(%sender, %target, operation, "registry updated"),
        Err(RegistryError::Unauthorized { .. }) => {
            warn!(%sender, %target, operation, "rejected non-admin sender");
        }
        Err(err) => info!(%sender, %target, operation, code = err.code(), %err, "rejected"),
    }
}
