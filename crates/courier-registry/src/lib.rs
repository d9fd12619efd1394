//! Application dependency registry for Courier.
//!
//! Single access point that lazily constructs and caches application-scoped
//! services behind the [`Provider`] capability trait. Expensive, long-lived
//! collaborators are built at most once, only when first needed, and shared
//! across threads without each caller re-implementing locking or lifecycle
//! logic.
//!
//! ## Caching policies
//!
//! - Most kinds are constructed on first access and cached for the process
//!   lifetime with a double-checked protocol (lock-free fast path).
//! - The message notifier and thread trimmer are constructed eagerly during
//!   [`Registry::init`]; the host needs them before anything else runs.
//! - The message sender is always cached, but the current transport pipes
//!   and multi-device flag are pushed into it on every access after the
//!   first.
//! - The message receiver can be explicitly reset; the next access
//!   re-provisions it through the provider.
//! - Network access is never cached; the provider is consulted per call.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // At startup, from the composition root:
//! courier_registry::global::init(Arc::new(AppProvider::new(config)))?;
//!
//! // Anywhere in the application afterwards:
//! let jobs = courier_registry::global::registry().job_manager()?;
//! ```
//!
//! Tests should construct their own [`Registry`] instances instead of going
//! through [`global`].

/// Process-wide registry instance
pub mod global;
/// Provider capability trait
pub mod provider;
/// The registry itself
pub mod registry;

mod slot;

pub use provider::Provider;
pub use registry::Registry;
