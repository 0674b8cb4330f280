//! Error handling types

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// A composite role that could not be satisfied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingRole {
    /// Role name inside the composite (e.g. "door")
    pub role: String,
    /// Capability the role asked for (e.g. "door")
    pub capability: String,
}

impl fmt::Display for MissingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.role, self.capability)
    }
}

fn join_roles(roles: &[MissingRole]) -> String {
    roles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Main error type for the capability playground
#[derive(Error, Debug)]
pub enum Error {
    /// No implementation registered for the requested capability
    #[error("Unresolved capability: {capability}")]
    UnresolvedCapability {
        /// The capability that has no registration
        capability: String,
    },

    /// A second registration under the strict policy
    #[error("Duplicate registration for capability '{capability}': '{implementation}'")]
    DuplicateRegistration {
        /// The capability that already has a registration
        capability: String,
        /// The implementation that was rejected
        implementation: String,
    },

    /// One or more composite roles could not be resolved
    #[error("Missing dependencies: {}", join_roles(.roles))]
    MissingDependency {
        /// Every unresolved role, in declaration order
        roles: Vec<MissingRole>,
    },

    /// A registration exists but produces a different object type
    #[error("Capability '{capability}' does not provide {expected}")]
    CapabilityMismatch {
        /// The capability name that was looked up
        capability: String,
        /// The object type the caller expected
        expected: &'static str,
    },

    /// Explicit selection of an implementation that is not registered
    #[error(
        "Unknown implementation '{implementation}' for capability '{capability}'. Available: {available:?}"
    )]
    UnknownImplementation {
        /// The capability that was searched
        capability: String,
        /// The implementation that was asked for
        implementation: String,
        /// Implementations registered for the capability
        available: Vec<String>,
    },

    /// A capability descriptor that cannot be registered
    #[error("Invalid capability '{capability}': {message}")]
    InvalidCapability {
        /// The capability name
        capability: String,
        /// What is wrong with it
        message: String,
    },

    /// Registration attempted after the initialization phase
    #[error("Registry is sealed; cannot register capability '{capability}'")]
    RegistrySealed {
        /// The capability whose registration was refused
        capability: String,
    },

    /// A strategy factory refused to build an instance
    #[error("Factory for '{implementation}' failed: {message}")]
    Factory {
        /// The implementation whose factory failed
        implementation: String,
        /// Description of the failure
        message: String,
    },

    /// Payment strategy error
    #[error("Payment error: {message}")]
    Payment {
        /// Description of the payment error
        message: String,
    },

    /// Persistence strategy error
    #[error("Persistence error: {message}")]
    Persistence {
        /// Description of the persistence error
        message: String,
    },

    /// Remote API error
    #[error("Remote API error: {message}")]
    RemoteApi {
        /// Description of the remote API error
        message: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration that could not be read, parsed or written
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Registry and composition errors
impl Error {
    /// Create an unresolved capability error
    pub fn unresolved<S: Into<String>>(capability: S) -> Self {
        Self::UnresolvedCapability {
            capability: capability.into(),
        }
    }

    /// Create a duplicate registration error
    pub fn duplicate<C: Into<String>, I: Into<String>>(capability: C, implementation: I) -> Self {
        Self::DuplicateRegistration {
            capability: capability.into(),
            implementation: implementation.into(),
        }
    }

    /// Create a factory error
    pub fn factory<I: Into<String>, S: Into<String>>(implementation: I, message: S) -> Self {
        Self::Factory {
            implementation: implementation.into(),
            message: message.into(),
        }
    }

    /// Names of the unresolved roles when this is a `MissingDependency`
    pub fn missing_roles(&self) -> Vec<&str> {
        match self {
            Self::MissingDependency { roles } => roles.iter().map(|r| r.role.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

// Strategy errors
impl Error {
    /// Create a payment error
    pub fn payment<S: Into<String>>(message: S) -> Self {
        Self::Payment {
            message: message.into(),
        }
    }

    /// Create a persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Create a remote API error
    pub fn remote_api<S: Into<String>>(message: S) -> Self {
        Self::RemoteApi {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Configuration errors
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
