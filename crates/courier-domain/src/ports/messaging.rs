//! Send/receive pipeline service ports.

use crate::transport::{TransportPipe, TransportRefresh};
use std::sync::Arc;

/// Outbound message sender.
///
/// The registry keeps one instance for the process lifetime. On every access
/// after the first it pushes the current transport state into that instance,
/// so a network reconnect elsewhere never invalidates references already
/// handed out while new calls still see the latest pipes.
pub trait MessageSender: Send + Sync {
    /// Replace the transport handles and device flag used for future sends.
    ///
    /// Must be safe to call concurrently with in-flight sends; callers
    /// holding an older view of the transport fields keep working.
    fn update_transport(&self, refresh: TransportRefresh);
}

/// Inbound message receiver.
///
/// Re-provisioned from scratch after an invalidating event such as a
/// credential or endpoint change, rather than patched in place.
pub trait MessageReceiver: Send + Sync {}

/// Long-lived observer of the inbound transport stream.
///
/// Owns the transport pipes; the registry reads them back out when
/// refreshing the message sender.
pub trait MessageObserver: Send + Sync {
    /// Current identified pipe, if a connection is established
    fn identified_pipe(&self) -> Option<Arc<dyn TransportPipe>>;

    /// Current unidentified pipe, if a connection is established
    fn unidentified_pipe(&self) -> Option<Arc<dyn TransportPipe>>;
}

/// Decrypts and dispatches messages pulled off the transport
pub trait MessageProcessor: Send + Sync {}

/// Fetches pending messages while no live stream is up
pub trait BackgroundRetriever: Send + Sync {}

/// Holds messages that arrived before the records they depend on
pub trait EarlyMessageCache: Send + Sync {}

/// Surfaces incoming-message notifications to the platform shell
pub trait MessageNotifier: Send + Sync {}

/// Tracks which conversations currently show a typing indicator
pub trait TypingStatusRepository: Send + Sync {}

/// Publishes this device's typing activity to conversation peers
pub trait TypingStatusSender: Send + Sync {}
