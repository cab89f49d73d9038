// Provider verification records and the admin-gated registry

use crate::clock::BlockClock;
use crate::error::{RegistryError, Result};
use crate::identity::Identity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

// ================================
// Verification Records
// ================================

/// Verification record held for a registered provider.
///
/// Presence of a record is what "verified" means; there is no stored record
/// with `verified == false`, and revocation deletes the entry outright.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationRecord {
    /// Provider display name
    pub name: String,
    /// Licensing identifier, opaque to the registry
    pub license_number: String,
    /// Declared specialty, opaque to the registry
    pub specialty: String,
    /// True for as long as the record exists
    pub verified: bool,
    /// Height stamped at registration or last update
    pub verification_height: u64,
}

/// Registry construction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Identity holding admin authority at creation
    pub admin: Identity,
}

// ================================
// Provider Registry
// ================================

/// Admin-gated registry of verified providers.
///
/// Owns the single admin slot and the provider map. Every mutating operation
/// authorizes the sender against the current admin and validates record
/// existence before touching state, so a failed call leaves the registry
/// exactly as it was.
pub struct ProviderRegistry {
    admin: Identity,
    providers: HashMap<Identity, VerificationRecord>,
    clock: Arc<dyn BlockClock>,
}

impl ProviderRegistry {
    /// Create an empty registry under the configured admin
    pub fn new(config: RegistryConfig, clock: Arc<dyn BlockClock>) -> Self {
        Self {
            admin: config.admin,
            providers: HashMap::new(),
            clock,
        }
    }

    /// Identity currently holding admin authority
    pub fn admin(&self) -> &Identity {
        &self.admin
    }

    /// Number of registered providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Whether `provider` currently holds a verification record.
    ///
    /// Pure lookup; no authorization required.
    pub fn is_provider_verified(&self, provider: &Identity) -> bool {
        self.providers.contains_key(provider)
    }

    /// Verification record for `provider`, if any.
    ///
    /// Pure lookup; no authorization required. Absence is not an error.
    pub fn get_provider_details(&self, provider: &Identity) -> Option<&VerificationRecord> {
        self.providers.get(provider)
    }

    /// Register a new provider as verified.
    ///
    /// Admin only. Fails with `AlreadyExists` if the provider already holds
    /// a record; the existing record is left untouched.
    pub fn add_provider(
        &mut self,
        sender: &Identity,
        provider: Identity,
        name: String,
        license_number: String,
        specialty: String,
    ) -> Result<()> {
        self.authorize(sender)?;

        if self.providers.contains_key(&provider) {
            return Err(RegistryError::AlreadyExists { provider });
        }

        let record = VerificationRecord {
            name,
            license_number,
            specialty,
            verified: true,
            verification_height: self.clock.current_height(),
        };
        self.providers.insert(provider, record);

        Ok(())
    }

    /// Delete a provider's verification record.
    ///
    /// Admin only. The entry is removed outright; subsequent lookups see the
    /// provider as unverified.
    pub fn revoke_provider(&mut self, sender: &Identity, provider: &Identity) -> Result<()> {
        self.authorize(sender)?;

        if self.providers.remove(provider).is_none() {
            return Err(RegistryError::NotFound {
                provider: provider.clone(),
            });
        }

        Ok(())
    }

    /// Replace an existing provider's record wholesale.
    ///
    /// Admin only. All three text fields are overwritten (no partial merge),
    /// `verified` stays true, and the height is refreshed to the clock's
    /// current value.
    pub fn update_provider(
        &mut self,
        sender: &Identity,
        provider: &Identity,
        name: String,
        license_number: String,
        specialty: String,
    ) -> Result<()> {
        self.authorize(sender)?;

        let record = self
            .providers
            .get_mut(provider)
            .ok_or_else(|| RegistryError::NotFound {
                provider: provider.clone(),
            })?;

        *record = VerificationRecord {
            name,
            license_number,
            specialty,
            verified: true,
            verification_height: self.clock.current_height(),
        };

        Ok(())
    }

    /// Hand admin authority to `new_admin`.
    ///
    /// Admin only. The target is unconstrained (self-transfer is allowed);
    /// authority switches atomically for all subsequent calls.
    pub fn transfer_admin(&mut self, sender: &Identity, new_admin: Identity) -> Result<()> {
        self.authorize(sender)?;
        self.admin = new_admin;
        Ok(())
    }

    fn authorize(&self, sender: &Identity) -> Result<()> {
        if *sender != self.admin {
            return Err(RegistryError::Unauthorized {
                sender: sender.clone(),
            });
        }
        Ok(())
    }
}
