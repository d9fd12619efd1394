//! Domain layer for the Courier messaging application.
//!
//! Defines the capability ports for every application-scoped service the
//! dependency registry manages, the transport value types exchanged through
//! the sender refresh hook, and the error taxonomy shared across the
//! workspace.
//!
//! Ports follow the Dependency Inversion Principle: the domain owns the
//! contracts, and the hosting application's composition root implements
//! them. Nothing in this crate performs I/O or holds state.

/// Domain layer constants
pub mod constants;
/// Key-backup enclave descriptors
pub mod enclave;
/// Error handling types
pub mod error;
/// Service capability ports
pub mod ports;
/// Transport pipe handles and refresh parameters
pub mod transport;

pub use enclave::KeyBackupEnclave;
pub use error::{Error, Result};
pub use transport::{TransportPipe, TransportRefresh};
