//! Account, backup and network-endpoint service ports.

use std::sync::Arc;

/// Account and device management service.
pub trait AccountManager: Send + Sync {
    /// Whether the account currently has linked companion devices
    fn is_multi_device(&self) -> bool;

    /// Build a key-backup client scoped to a single enclave.
    ///
    /// `service_id` is the already-decoded raw id; descriptor validation
    /// happens before this is called. The returned client is not retained
    /// anywhere; callers own it.
    fn key_backup_service(
        &self,
        credentials: Arc<dyn CredentialStore>,
        enclave_name: &str,
        service_id: Vec<u8>,
        mr_enclave: &str,
        max_tries: u32,
    ) -> Arc<dyn KeyBackupService>;
}

/// Local store for the attestation credentials a key-backup client needs
pub trait CredentialStore: Send + Sync {}

/// Client for one remote key-backup enclave
pub trait KeyBackupService: Send + Sync {}

/// Resolves which service endpoints clients should currently talk to.
///
/// Endpoint selection can change at any time (e.g. censorship
/// circumvention), which is why this kind is never cached.
pub trait NetworkAccess: Send + Sync {}

/// Client-side group state operations
pub trait GroupOperations: Send + Sync {}
