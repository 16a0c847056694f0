//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Vessel resolution engine
///
/// All failures are synchronous and deterministic for an unchanged
/// registry; nothing in the core retries.
#[derive(Error, Debug)]
pub enum Error {
    /// Zero survivors for a required injection request
    #[error("unsatisfied resolution for contract {contract} with qualifiers {qualifiers}")]
    UnsatisfiedResolution {
        /// Rendered requested contract
        contract: String,
        /// Rendered requested qualifiers after normalization
        qualifiers: String,
    },

    /// More than one survivor after both tie-break passes
    #[error("ambiguous resolution, {} candidates survived: {candidates:?}", candidates.len())]
    AmbiguousResolution {
        /// Every surviving candidate
        candidates: Vec<String>,
    },

    /// Passivation-id collision at registration time; aborts boot
    #[error("passivation id is not unique: {passivation_id} already registered, rejected {component}")]
    DuplicateDefinition {
        /// The colliding passivation id
        passivation_id: String,
        /// Rendered component whose registration was rejected
        component: String,
    },

    /// No active context for the requested scope on the calling thread
    #[error("context for scope {scope} is not active on the current thread")]
    ContextNotActive {
        /// Rendered scope tag
        scope: String,
    },

    /// More than one simultaneously active context for a scope
    #[error("more than one active context exists for scope {scope}")]
    IllegalContextState {
        /// Rendered scope tag
        scope: String,
    },

    /// Invalid argument provided to a container operation
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Client proxy creation failed in the proxy-factory port
    #[error("proxy creation failed for {component}: {message}")]
    ProxyCreation {
        /// Rendered component
        component: String,
        /// Description of the factory failure
        message: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error from a message
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid-argument error from a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}
