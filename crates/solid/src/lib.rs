//! # SOLID capability playground
//!
//! Facade over the workspace crates plus the command implementations used
//! by the `solid` binary.
//!
//! ## Example
//!
//! ```ignore
//! use solid::application::use_cases::Cage;
//! use solid::infrastructure::{init_app, AppConfig};
//!
//! let context = init_app(AppConfig::default())?;
//! let cage: Cage = context.composer.compose_default()?;
//! println!("{}", cage.describe());
//! ```

pub mod cli;

pub use solid_application as application;
pub use solid_domain as domain;
pub use solid_infrastructure as infrastructure;
// Re-export also links solid-providers, which populates the strategy catalogue
pub use solid_providers as providers;
