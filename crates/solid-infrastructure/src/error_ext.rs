//! Error extension utilities
//!
//! Converts foreign errors into the domain `Error` with a context message.

use std::fmt;

use solid_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// ```ignore
/// use solid_infrastructure::error_ext::ErrorContext;
///
/// let config: AppConfig = figment.extract().config_context("Failed to extract configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context, converting the error to a configuration error
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;

    /// Add context with lazy evaluation
    fn with_config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| Error::configuration_with_source(format!("{context}: {e}"), e))
    }

    fn with_config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::configuration_with_source(format!("{}: {e}", f()), e))
    }
}
