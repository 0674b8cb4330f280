//! Configuration management
//!
//! `types` holds the serde data model, `loader` merges the sources.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RegistryConfig, StrategyConfig};
