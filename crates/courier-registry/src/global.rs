//! Process-wide registry instance.
//!
//! The hosting application installs its provider here once, early in
//! startup, and every component reaches the same [`Registry`] afterwards.
//! Tests should construct their own [`Registry`] instances instead of going
//! through this module, since the static lives for the whole test process.

use crate::provider::Provider;
use crate::registry::Registry;
use courier_domain::Result;
use once_cell::sync::Lazy;
use std::sync::Arc;

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Install the provider into the process-wide registry.
///
/// Call exactly once from the composition root before any other component
/// runs.
pub fn init(provider: Arc<dyn Provider>) -> Result<()> {
    REGISTRY.init(provider)
}

/// The process-wide registry
pub fn registry() -> &'static Registry {
    &REGISTRY
}
