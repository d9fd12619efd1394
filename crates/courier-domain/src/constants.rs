//! Domain layer constants

/// Attempt count forwarded to the account manager's key-backup factory.
///
/// The backup service retries remote attestation up to this many times
/// before surfacing a failure to the caller.
pub const KEY_BACKUP_MAX_TRIES: u32 = 10;
