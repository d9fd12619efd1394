//! Transport pipe handles and refresh parameters.

use std::fmt;
use std::sync::Arc;

/// Handle to an established transport pipe.
///
/// Pipes are owned by the message observer and replaced wholesale on a
/// network reconnect. The registry never inspects a pipe; it only forwards
/// the current handles into the cached message sender.
pub trait TransportPipe: Send + Sync {}

/// Snapshot of transport state pushed into the cached message sender on
/// every access after the first.
#[derive(Clone)]
pub struct TransportRefresh {
    /// Current identified pipe, if a connection is established
    pub identified_pipe: Option<Arc<dyn TransportPipe>>,
    /// Current unidentified pipe, if a connection is established
    pub unidentified_pipe: Option<Arc<dyn TransportPipe>>,
    /// Whether the account currently has linked companion devices
    pub multi_device: bool,
}

impl fmt::Debug for TransportRefresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRefresh")
            .field("identified_pipe", &self.identified_pipe.is_some())
            .field("unidentified_pipe", &self.unidentified_pipe.is_some())
            .field("multi_device", &self.multi_device)
            .finish()
    }
}
