//! Infrastructure Layer - SOLID capability playground
//!
//! Cross-cutting technical concerns:
//!
//! - `config`: figment-based configuration (defaults → TOML → `SOLID__` env)
//! - `logging`: tracing subscriber setup
//! - `bootstrap`: builds and seals the registry from configuration
//! - `error_ext`: context helpers for foreign errors

// Force linkme registration of all strategies
extern crate solid_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, bootstrap, init_app};
pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig, StrategyConfig};
