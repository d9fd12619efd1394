//! Key-backup enclave descriptors.

use serde::{Deserialize, Serialize};

/// Descriptor for a remote key-backup enclave.
///
/// Descriptors arrive from remote configuration. The `service_id` field is
/// kept hex-encoded as delivered and is validated at the access site; a
/// malformed id aborts the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBackupEnclave {
    /// Enclave name registered with the backup service
    pub enclave_name: String,
    /// Hex-encoded service id
    pub service_id: String,
    /// Expected MRENCLAVE measurement
    pub mr_enclave: String,
}

impl KeyBackupEnclave {
    /// Create an enclave descriptor
    pub fn new(
        enclave_name: impl Into<String>,
        service_id: impl Into<String>,
        mr_enclave: impl Into<String>,
    ) -> Self {
        Self {
            enclave_name: enclave_name.into(),
            service_id: service_id.into(),
            mr_enclave: mr_enclave.into(),
        }
    }
}
