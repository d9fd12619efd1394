//! Provider capability trait.
//!
//! Implemented exactly once, by the hosting application's composition root,
//! and installed via [`Registry::init`](crate::Registry::init). One factory
//! method per service kind. Factories are pure (no arguments) and fallible:
//! a failure propagates unchanged to the caller that triggered construction,
//! the cache slot stays empty, and the next access retries from scratch.
//!
//! A factory may resolve its own dependencies back through the registry
//! (the registry lock is reentrant), but it must not block on work that
//! itself waits for the construction in flight.

use courier_domain::ports::{
    AccountManager, BackgroundRetriever, CredentialStore, DatabaseObserver, EarlyMessageCache,
    FrameRateTracker, GroupOperations, JobManager, MegaphoneRepository, MessageNotifier,
    MessageObserver, MessageProcessor, MessageReceiver, MessageSender, NetworkAccess,
    RecipientCache, ThreadTrimmer, TypingStatusRepository, TypingStatusSender,
};
use courier_domain::Result;
use std::sync::Arc;

/// Construction entry points for every service kind the registry manages
pub trait Provider: Send + Sync {
    /// Message notifier, constructed eagerly at initialization
    fn provide_message_notifier(&self) -> Result<Arc<dyn MessageNotifier>>;

    /// Thread trimmer, constructed eagerly at initialization
    fn provide_thread_trimmer(&self) -> Result<Arc<dyn ThreadTrimmer>>;

    /// Account and device management service
    fn provide_account_manager(&self) -> Result<Arc<dyn AccountManager>>;

    /// Outbound message sender
    fn provide_message_sender(&self) -> Result<Arc<dyn MessageSender>>;

    /// Inbound message receiver
    fn provide_message_receiver(&self) -> Result<Arc<dyn MessageReceiver>>;

    /// Inbound transport stream observer
    fn provide_message_observer(&self) -> Result<Arc<dyn MessageObserver>>;

    /// Inbound message processor
    fn provide_message_processor(&self) -> Result<Arc<dyn MessageProcessor>>;

    /// Background message retriever
    fn provide_background_retriever(&self) -> Result<Arc<dyn BackgroundRetriever>>;

    /// Recipient record cache
    fn provide_recipient_cache(&self) -> Result<Arc<dyn RecipientCache>>;

    /// Background job queue
    fn provide_job_manager(&self) -> Result<Arc<dyn JobManager>>;

    /// UI frame timing tracker
    fn provide_frame_rate_tracker(&self) -> Result<Arc<dyn FrameRateTracker>>;

    /// In-app announcement repository
    fn provide_megaphone_repository(&self) -> Result<Arc<dyn MegaphoneRepository>>;

    /// Cache for messages that arrived ahead of their dependencies
    fn provide_early_message_cache(&self) -> Result<Arc<dyn EarlyMessageCache>>;

    /// Typing indicator repository
    fn provide_typing_status_repository(&self) -> Result<Arc<dyn TypingStatusRepository>>;

    /// Typing activity sender
    fn provide_typing_status_sender(&self) -> Result<Arc<dyn TypingStatusSender>>;

    /// Database change observer
    fn provide_database_observer(&self) -> Result<Arc<dyn DatabaseObserver>>;

    /// Group state operations
    fn provide_group_operations(&self) -> Result<Arc<dyn GroupOperations>>;

    /// Current network endpoint resolution; consulted on every access
    fn provide_network_access(&self) -> Result<Arc<dyn NetworkAccess>>;

    /// Attestation credential store for key-backup clients
    fn provide_credential_store(&self) -> Result<Arc<dyn CredentialStore>>;
}
