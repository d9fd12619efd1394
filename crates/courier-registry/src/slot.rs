//! Typed cache slot for a single service kind.

use parking_lot::RwLock;
use std::sync::Arc;

/// One cache slot.
///
/// The slot lock is held only to clone or swap the `Arc`, never across a
/// construction call. Serializing construction is the registry's job.
pub struct Slot<S: ?Sized> {
    inner: RwLock<Option<Arc<S>>>,
}

impl<S: ?Sized> Slot<S> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Current instance, if the slot has been populated
    pub fn get(&self) -> Option<Arc<S>> {
        self.inner.read().clone()
    }

    /// Publish an instance; later reads observe it fully constructed
    pub fn set(&self, service: Arc<S>) {
        *self.inner.write() = Some(service);
    }

    /// Empty the slot so the next access re-provisions
    pub fn clear(&self) {
        *self.inner.write() = None;
    }
}

impl<S: ?Sized> Default for Slot<S> {
    fn default() -> Self {
        Self::new()
    }
}
