//! Process-wide service registry.
//!
//! Holds the installed [`Provider`] plus one cache slot per service kind.
//! First access to a kind constructs it through the provider under the
//! registry lock; later accesses return the cached instance from a
//! lock-free slot read. The lock protects only the cache slots and the
//! sender refresh, never the internal state of the services themselves.

use crate::provider::Provider;
use crate::slot::Slot;
use courier_domain::constants::KEY_BACKUP_MAX_TRIES;
use courier_domain::enclave::KeyBackupEnclave;
use courier_domain::error::{Error, Result};
use courier_domain::ports::{
    AccountManager, BackgroundRetriever, DatabaseObserver, EarlyMessageCache, FrameRateTracker,
    GroupOperations, JobManager, KeyBackupService, MegaphoneRepository, MessageNotifier,
    MessageObserver, MessageProcessor, MessageReceiver, MessageSender, NetworkAccess,
    RecipientCache, ThreadTrimmer, TypingStatusRepository, TypingStatusSender,
};
use courier_domain::transport::TransportRefresh;
use once_cell::sync::OnceCell;
use parking_lot::{Mutex, ReentrantMutex};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Application-scoped service registry.
///
/// One instance lives for the whole process (see [`crate::global`]); tests
/// construct their own. All accessors are cheap in steady state (the cache
/// slot is read without taking the registry lock), and every returned
/// reference is identity-stable across calls unless explicitly reset.
pub struct Registry {
    provider: OnceCell<Arc<dyn Provider>>,

    // Construction of every kind except the frame rate tracker is
    // serialized on this lock. Reentrant: a provider factory may resolve
    // its own dependencies through the registry while a construction is in
    // flight.
    lock: ReentrantMutex<()>,
    // Keeps frame-rate-tracker construction from contending with unrelated
    // kinds on first access.
    frame_rate_lock: Mutex<()>,

    message_notifier: Slot<dyn MessageNotifier>,
    thread_trimmer: Slot<dyn ThreadTrimmer>,
    account_manager: Slot<dyn AccountManager>,
    message_sender: Slot<dyn MessageSender>,
    message_receiver: Slot<dyn MessageReceiver>,
    message_observer: Slot<dyn MessageObserver>,
    message_processor: Slot<dyn MessageProcessor>,
    background_retriever: Slot<dyn BackgroundRetriever>,
    recipient_cache: Slot<dyn RecipientCache>,
    job_manager: Slot<dyn JobManager>,
    frame_rate_tracker: Slot<dyn FrameRateTracker>,
    megaphone_repository: Slot<dyn MegaphoneRepository>,
    early_message_cache: Slot<dyn EarlyMessageCache>,
    typing_status_repository: Slot<dyn TypingStatusRepository>,
    typing_status_sender: Slot<dyn TypingStatusSender>,
    database_observer: Slot<dyn DatabaseObserver>,
    group_operations: Slot<dyn GroupOperations>,
}

impl Registry {
    /// Create an uninitialized registry. No service can be resolved until
    /// [`init`](Self::init) installs a provider.
    pub fn new() -> Self {
        Self {
            provider: OnceCell::new(),
            lock: ReentrantMutex::new(()),
            frame_rate_lock: Mutex::new(()),
            message_notifier: Slot::new(),
            thread_trimmer: Slot::new(),
            account_manager: Slot::new(),
            message_sender: Slot::new(),
            message_receiver: Slot::new(),
            message_observer: Slot::new(),
            message_processor: Slot::new(),
            background_retriever: Slot::new(),
            recipient_cache: Slot::new(),
            job_manager: Slot::new(),
            frame_rate_tracker: Slot::new(),
            megaphone_repository: Slot::new(),
            early_message_cache: Slot::new(),
            typing_status_repository: Slot::new(),
            typing_status_sender: Slot::new(),
            database_observer: Slot::new(),
            group_operations: Slot::new(),
        }
    }

    /// Install the provider and eagerly construct the services the host
    /// needs before anything else runs.
    ///
    /// Must be called exactly once, from the startup context, before any
    /// accessor. A second call fails with [`Error::AlreadyInitialized`] and
    /// leaves the first provider active. An eager-construction failure
    /// propagates to the caller and should abort startup.
    pub fn init(&self, provider: Arc<dyn Provider>) -> Result<()> {
        let _guard = self.lock.lock();

        if self.provider.set(Arc::clone(&provider)).is_err() {
            return Err(Error::AlreadyInitialized);
        }

        // The notifier and the trimmer must exist before the first message
        // or trim cycle arrives; everything else stays deferred.
        self.message_notifier
            .set(provider.provide_message_notifier()?);
        self.thread_trimmer.set(provider.provide_thread_trimmer()?);

        info!("dependency registry initialized");
        Ok(())
    }

    /// The installed provider
    pub fn provider(&self) -> Result<Arc<dyn Provider>> {
        self.provider.get().cloned().ok_or(Error::NotInitialized)
    }

    /// Message notifier, constructed eagerly during [`init`](Self::init)
    pub fn message_notifier(&self) -> Result<Arc<dyn MessageNotifier>> {
        self.message_notifier.get().ok_or(Error::NotInitialized)
    }

    /// Thread trimmer, constructed eagerly during [`init`](Self::init)
    pub fn thread_trimmer(&self) -> Result<Arc<dyn ThreadTrimmer>> {
        self.thread_trimmer.get().ok_or(Error::NotInitialized)
    }

    /// Account and device management service
    pub fn account_manager(&self) -> Result<Arc<dyn AccountManager>> {
        self.get_or_provide(&self.account_manager, "account_manager", |p| {
            p.provide_account_manager()
        })
    }

    /// Outbound message sender.
    ///
    /// Always cached, but on every access after the first the current
    /// transport pipes and multi-device flag are pushed into the cached
    /// instance. Components holding an older reference keep working; newly
    /// made calls see transport state from after the latest reconnect.
    pub fn message_sender(&self) -> Result<Arc<dyn MessageSender>> {
        let _guard = self.lock.lock();

        if let Some(sender) = self.message_sender.get() {
            sender.update_transport(self.transport_refresh()?);
            return Ok(sender);
        }

        let sender = self.provider()?.provide_message_sender()?;
        self.message_sender.set(Arc::clone(&sender));
        debug!("constructed message sender");
        Ok(sender)
    }

    /// Inbound message receiver
    pub fn message_receiver(&self) -> Result<Arc<dyn MessageReceiver>> {
        self.get_or_provide(&self.message_receiver, "message_receiver", |p| {
            p.provide_message_receiver()
        })
    }

    /// Drop the cached message receiver so the next access re-provisions it.
    ///
    /// Called when an external event, such as a credential or endpoint
    /// change, has invalidated the current instance. Nothing is
    /// reconstructed here.
    pub fn reset_message_receiver(&self) {
        let _guard = self.lock.lock();
        self.message_receiver.clear();
        debug!("message receiver reset");
    }

    /// Inbound transport stream observer
    pub fn message_observer(&self) -> Result<Arc<dyn MessageObserver>> {
        self.get_or_provide(&self.message_observer, "message_observer", |p| {
            p.provide_message_observer()
        })
    }

    /// Inbound message processor
    pub fn message_processor(&self) -> Result<Arc<dyn MessageProcessor>> {
        self.get_or_provide(&self.message_processor, "message_processor", |p| {
            p.provide_message_processor()
        })
    }

    /// Background message retriever
    pub fn background_retriever(&self) -> Result<Arc<dyn BackgroundRetriever>> {
        self.get_or_provide(&self.background_retriever, "background_retriever", |p| {
            p.provide_background_retriever()
        })
    }

    /// Recipient record cache
    pub fn recipient_cache(&self) -> Result<Arc<dyn RecipientCache>> {
        self.get_or_provide(&self.recipient_cache, "recipient_cache", |p| {
            p.provide_recipient_cache()
        })
    }

    /// Background job queue
    pub fn job_manager(&self) -> Result<Arc<dyn JobManager>> {
        self.get_or_provide(&self.job_manager, "job_manager", |p| p.provide_job_manager())
    }

    /// UI frame timing tracker.
    ///
    /// Construction is isolated on its own lock so a slow first access here
    /// never waits on an unrelated service being built, and vice versa.
    pub fn frame_rate_tracker(&self) -> Result<Arc<dyn FrameRateTracker>> {
        if let Some(existing) = self.frame_rate_tracker.get() {
            return Ok(existing);
        }

        let _guard = self.frame_rate_lock.lock();
        if let Some(existing) = self.frame_rate_tracker.get() {
            return Ok(existing);
        }

        let tracker = self.provider()?.provide_frame_rate_tracker()?;
        self.frame_rate_tracker.set(Arc::clone(&tracker));
        debug!("constructed frame rate tracker");
        Ok(tracker)
    }

    /// In-app announcement repository
    pub fn megaphone_repository(&self) -> Result<Arc<dyn MegaphoneRepository>> {
        self.get_or_provide(&self.megaphone_repository, "megaphone_repository", |p| {
            p.provide_megaphone_repository()
        })
    }

    /// Cache for messages that arrived ahead of their dependencies
    pub fn early_message_cache(&self) -> Result<Arc<dyn EarlyMessageCache>> {
        self.get_or_provide(&self.early_message_cache, "early_message_cache", |p| {
            p.provide_early_message_cache()
        })
    }

    /// Typing indicator repository
    pub fn typing_status_repository(&self) -> Result<Arc<dyn TypingStatusRepository>> {
        self.get_or_provide(
            &self.typing_status_repository,
            "typing_status_repository",
            |p| p.provide_typing_status_repository(),
        )
    }

    /// Typing activity sender
    pub fn typing_status_sender(&self) -> Result<Arc<dyn TypingStatusSender>> {
        self.get_or_provide(&self.typing_status_sender, "typing_status_sender", |p| {
            p.provide_typing_status_sender()
        })
    }

    /// Database change observer
    pub fn database_observer(&self) -> Result<Arc<dyn DatabaseObserver>> {
        self.get_or_provide(&self.database_observer, "database_observer", |p| {
            p.provide_database_observer()
        })
    }

    /// Group state operations
    pub fn group_operations(&self) -> Result<Arc<dyn GroupOperations>> {
        self.get_or_provide(&self.group_operations, "group_operations", |p| {
            p.provide_group_operations()
        })
    }

    /// Current network endpoint resolution.
    ///
    /// Never cached: endpoint selection can change at any time, so the
    /// provider is consulted on every call.
    pub fn network_access(&self) -> Result<Arc<dyn NetworkAccess>> {
        self.provider()?.provide_network_access()
    }

    /// Key-backup client for `enclave`.
    ///
    /// Not cached; only the underlying account manager is. The enclave's
    /// hex service id is validated before anything is constructed; a
    /// malformed id aborts the call.
    pub fn key_backup_service(
        &self,
        enclave: &KeyBackupEnclave,
    ) -> Result<Arc<dyn KeyBackupService>> {
        let service_id = hex::decode(&enclave.service_id)?;
        let credentials = self.provider()?.provide_credential_store()?;

        Ok(self.account_manager()?.key_backup_service(
            credentials,
            &enclave.enclave_name,
            service_id,
            &enclave.mr_enclave,
            KEY_BACKUP_MAX_TRIES,
        ))
    }

    /// Double-checked lazy construction for the kinds sharing the registry
    /// lock: lock-free read, then lock, re-check, construct, publish. A
    /// factory failure leaves the slot empty so the next call retries.
    fn get_or_provide<S: ?Sized>(
        &self,
        slot: &Slot<S>,
        kind: &'static str,
        provide: impl FnOnce(&dyn Provider) -> Result<Arc<S>>,
    ) -> Result<Arc<S>> {
        if let Some(existing) = slot.get() {
            return Ok(existing);
        }

        let _guard = self.lock.lock();

        // Another caller may have populated the slot while we waited.
        if let Some(existing) = slot.get() {
            return Ok(existing);
        }

        let provider = self.provider()?;
        let service = provide(provider.as_ref())?;
        slot.set(Arc::clone(&service));
        debug!(kind, "constructed service");
        Ok(service)
    }

    // Reads the refresh parameters through the ordinary accessors; the
    // registry lock is reentrant, so the nested resolution is safe even
    // when the observer or account manager has not been built yet.
    fn transport_refresh(&self) -> Result<TransportRefresh> {
        let observer = self.message_observer()?;
        let multi_device = self.account_manager()?.is_multi_device();

        Ok(TransportRefresh {
            identified_pipe: observer.identified_pipe(),
            unidentified_pipe: observer.unidentified_pipe(),
            multi_device,
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("initialized", &self.provider.get().is_some())
            .finish_non_exhaustive()
    }
}
