//! Shared test doubles for the registry suites.
//!
//! Cheap fakes stand in for every service kind so the tests stay
//! independent of real network or storage services. The provider counts
//! every factory invocation so construct-once properties can be asserted
//! directly.

#![allow(dead_code)]

use courier_domain::ports::{
    AccountManager, BackgroundRetriever, CredentialStore, DatabaseObserver, EarlyMessageCache,
    FrameRateTracker, GroupOperations, JobManager, KeyBackupService, MegaphoneRepository,
    MessageNotifier, MessageObserver, MessageProcessor, MessageReceiver, MessageSender,
    NetworkAccess, RecipientCache, ThreadTrimmer, TypingStatusRepository, TypingStatusSender,
};
use courier_domain::transport::{TransportPipe, TransportRefresh};
use courier_domain::{Error, Result};
use courier_registry::{Provider, Registry};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Opaque stand-in for every service kind the registry only hands out
pub struct FakeService;

impl MessageReceiver for FakeService {}
impl MessageProcessor for FakeService {}
impl BackgroundRetriever for FakeService {}
impl EarlyMessageCache for FakeService {}
impl MessageNotifier for FakeService {}
impl TypingStatusRepository for FakeService {}
impl TypingStatusSender for FakeService {}
impl JobManager for FakeService {}
impl FrameRateTracker for FakeService {}
impl DatabaseObserver for FakeService {}
impl MegaphoneRepository for FakeService {}
impl RecipientCache for FakeService {}
impl ThreadTrimmer for FakeService {}
impl NetworkAccess for FakeService {}
impl GroupOperations for FakeService {}
impl CredentialStore for FakeService {}
impl KeyBackupService for FakeService {}

/// Transport pipe stand-in; identity is all the tests care about
pub struct FakePipe;

impl TransportPipe for FakePipe {}

/// Message sender double that records every refresh pushed into it
#[derive(Default)]
pub struct FakeSender {
    pub update_calls: AtomicUsize,
    pub last_refresh: Mutex<Option<TransportRefresh>>,
}

impl MessageSender for FakeSender {
    fn update_transport(&self, refresh: TransportRefresh) {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_refresh.lock() = Some(refresh);
    }
}

/// Observer double with swappable pipes, standing in for a reconnect
#[derive(Default)]
pub struct FakeObserver {
    pub identified: Mutex<Option<Arc<dyn TransportPipe>>>,
    pub unidentified: Mutex<Option<Arc<dyn TransportPipe>>>,
}

impl FakeObserver {
    pub fn swap_pipes(
        &self,
        identified: Option<Arc<dyn TransportPipe>>,
        unidentified: Option<Arc<dyn TransportPipe>>,
    ) {
        *self.identified.lock() = identified;
        *self.unidentified.lock() = unidentified;
    }
}

impl MessageObserver for FakeObserver {
    fn identified_pipe(&self) -> Option<Arc<dyn TransportPipe>> {
        self.identified.lock().clone()
    }

    fn unidentified_pipe(&self) -> Option<Arc<dyn TransportPipe>> {
        self.unidentified.lock().clone()
    }
}

/// Arguments one key-backup factory call received
pub struct BackupRequest {
    pub enclave_name: String,
    pub service_id: Vec<u8>,
    pub mr_enclave: String,
    pub max_tries: u32,
}

/// Account manager double recording key-backup factory calls
#[derive(Default)]
pub struct FakeAccountManager {
    pub multi_device: AtomicBool,
    pub backup_requests: Mutex<Vec<BackupRequest>>,
}

impl AccountManager for FakeAccountManager {
    fn is_multi_device(&self) -> bool {
        self.multi_device.load(Ordering::SeqCst)
    }

    fn key_backup_service(
        &self,
        _credentials: Arc<dyn CredentialStore>,
        enclave_name: &str,
        service_id: Vec<u8>,
        mr_enclave: &str,
        max_tries: u32,
    ) -> Arc<dyn KeyBackupService> {
        self.backup_requests.lock().push(BackupRequest {
            enclave_name: enclave_name.to_string(),
            service_id,
            mr_enclave: mr_enclave.to_string(),
            max_tries,
        });
        Arc::new(FakeService)
    }
}

/// Factory invocation counters, one per provider method
#[derive(Default)]
pub struct Counters {
    pub message_notifier: AtomicUsize,
    pub thread_trimmer: AtomicUsize,
    pub account_manager: AtomicUsize,
    pub message_sender: AtomicUsize,
    pub message_receiver: AtomicUsize,
    pub message_observer: AtomicUsize,
    pub message_processor: AtomicUsize,
    pub background_retriever: AtomicUsize,
    pub recipient_cache: AtomicUsize,
    pub job_manager: AtomicUsize,
    pub frame_rate_tracker: AtomicUsize,
    pub megaphone_repository: AtomicUsize,
    pub early_message_cache: AtomicUsize,
    pub typing_status_repository: AtomicUsize,
    pub typing_status_sender: AtomicUsize,
    pub database_observer: AtomicUsize,
    pub group_operations: AtomicUsize,
    pub network_access: AtomicUsize,
    pub credential_store: AtomicUsize,
}

/// Provider double backing a whole registry with fakes.
///
/// `fail_job_manager_once` makes the next job-manager construction fail, to
/// exercise the retry-after-failure path. `resolve_account_during_sender`
/// makes the sender factory resolve the account manager back through the
/// registry mid-construction, to exercise the reentrant lock.
pub struct FakeProvider {
    pub counters: Counters,
    pub observer: Arc<FakeObserver>,
    pub account: Arc<FakeAccountManager>,
    pub sender: Arc<FakeSender>,
    pub fail_job_manager_once: AtomicBool,
    pub resolve_account_during_sender: AtomicBool,
    registry: Mutex<Option<Weak<Registry>>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            counters: Counters::default(),
            observer: Arc::new(FakeObserver::default()),
            account: Arc::new(FakeAccountManager::default()),
            sender: Arc::new(FakeSender::default()),
            fail_job_manager_once: AtomicBool::new(false),
            resolve_account_during_sender: AtomicBool::new(false),
            registry: Mutex::new(None),
        }
    }

    /// Give the provider a way back into the registry it serves
    pub fn attach_registry(&self, registry: &Arc<Registry>) {
        *self.registry.lock() = Some(Arc::downgrade(registry));
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for FakeProvider {
    fn provide_message_notifier(&self) -> Result<Arc<dyn MessageNotifier>> {
        self.counters.message_notifier.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_thread_trimmer(&self) -> Result<Arc<dyn ThreadTrimmer>> {
        self.counters.thread_trimmer.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_account_manager(&self) -> Result<Arc<dyn AccountManager>> {
        self.counters.account_manager.fetch_add(1, Ordering::SeqCst);
        Ok(self.account.clone())
    }

    fn provide_message_sender(&self) -> Result<Arc<dyn MessageSender>> {
        self.counters.message_sender.fetch_add(1, Ordering::SeqCst);
        if self.resolve_account_during_sender.load(Ordering::SeqCst) {
            let registry = self.registry.lock().as_ref().and_then(Weak::upgrade);
            if let Some(registry) = registry {
                registry.account_manager()?;
            }
        }
        Ok(self.sender.clone())
    }

    fn provide_message_receiver(&self) -> Result<Arc<dyn MessageReceiver>> {
        self.counters.message_receiver.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_message_observer(&self) -> Result<Arc<dyn MessageObserver>> {
        self.counters.message_observer.fetch_add(1, Ordering::SeqCst);
        Ok(self.observer.clone())
    }

    fn provide_message_processor(&self) -> Result<Arc<dyn MessageProcessor>> {
        self.counters.message_processor.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_background_retriever(&self) -> Result<Arc<dyn BackgroundRetriever>> {
        self.counters
            .background_retriever
            .fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_recipient_cache(&self) -> Result<Arc<dyn RecipientCache>> {
        self.counters.recipient_cache.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_job_manager(&self) -> Result<Arc<dyn JobManager>> {
        self.counters.job_manager.fetch_add(1, Ordering::SeqCst);
        if self.fail_job_manager_once.swap(false, Ordering::SeqCst) {
            return Err(Error::provider("job manager backend unavailable"));
        }
        Ok(Arc::new(FakeService))
    }

    fn provide_frame_rate_tracker(&self) -> Result<Arc<dyn FrameRateTracker>> {
        self.counters
            .frame_rate_tracker
            .fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_megaphone_repository(&self) -> Result<Arc<dyn MegaphoneRepository>> {
        self.counters
            .megaphone_repository
            .fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_early_message_cache(&self) -> Result<Arc<dyn EarlyMessageCache>> {
        self.counters
            .early_message_cache
            .fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_typing_status_repository(&self) -> Result<Arc<dyn TypingStatusRepository>> {
        self.counters
            .typing_status_repository
            .fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_typing_status_sender(&self) -> Result<Arc<dyn TypingStatusSender>> {
        self.counters
            .typing_status_sender
            .fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_database_observer(&self) -> Result<Arc<dyn DatabaseObserver>> {
        self.counters
            .database_observer
            .fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_group_operations(&self) -> Result<Arc<dyn GroupOperations>> {
        self.counters.group_operations.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_network_access(&self) -> Result<Arc<dyn NetworkAccess>> {
        self.counters.network_access.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }

    fn provide_credential_store(&self) -> Result<Arc<dyn CredentialStore>> {
        self.counters.credential_store.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeService))
    }
}
