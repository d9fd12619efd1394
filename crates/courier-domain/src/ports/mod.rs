//! Service Capability Ports
//!
//! One trait per application-scoped service kind the dependency registry
//! manages. The registry constructs these through the provider installed at
//! startup and shares them as `Arc<dyn Trait>`.
//!
//! Ports carry only the surface the registry itself touches: the message
//! sender's transport-refresh hook, the observer's pipe getters, and the
//! account manager's key-backup factory. Everything else a service does is
//! its own business; each instance is responsible for its own internal
//! thread-safety once constructed.
//!
//! ## Organization
//!
//! - **messaging** - the send/receive pipeline services
//! - **account** - account, backup and network-endpoint services
//! - **runtime** - background runtime services (jobs, observers, telemetry)

/// Account, backup and network-endpoint service ports
pub mod account;
/// Send/receive pipeline service ports
pub mod messaging;
/// Background runtime service ports
pub mod runtime;

// Re-export all port traits for convenience
pub use account::{
    AccountManager, CredentialStore, GroupOperations, KeyBackupService, NetworkAccess,
};
pub use messaging::{
    BackgroundRetriever, EarlyMessageCache, MessageNotifier, MessageObserver, MessageProcessor,
    MessageReceiver, MessageSender, TypingStatusRepository, TypingStatusSender,
};
pub use runtime::{
    DatabaseObserver, FrameRateTracker, JobManager, MegaphoneRepository, RecipientCache,
    ThreadTrimmer,
};
