//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Courier workspace
#[derive(Error, Debug)]
pub enum Error {
    /// An accessor was called before the registry was initialized.
    ///
    /// This is a programming-contract violation, not a recoverable runtime
    /// condition: the composition root must install a provider before any
    /// other component runs.
    #[error("dependency registry has not been initialized")]
    NotInitialized,

    /// The registry was asked to initialize a second time. The provider
    /// installed by the first call remains active.
    #[error("dependency registry is already initialized")]
    AlreadyInitialized,

    /// An enclave descriptor carried a malformed hex service id
    #[error("malformed enclave service id: {source}")]
    Decode {
        /// The underlying hex decoding error
        #[from]
        source: hex::FromHexError,
    },

    /// A provider factory failed to construct a service
    #[error("provider error: {message}")]
    Provider {
        /// Description of the construction failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a provider construction error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider construction error with source
    pub fn provider_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
