//! Strategy Registry System
//!
//! Maps capability names to the strategy factories able to satisfy them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Strategy Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Strategy defines:  #[linkme::distributed_slice(STRATEGIES)] │
//! │                        static ENTRY: StrategyEntry = ...        │
//! │                              ↓                                  │
//! │  2. Bootstrap installs: install_strategy(&registry, ...)        │
//! │                              ↓                                  │
//! │  3. Registry seals after the init phase                         │
//! │                              ↓                                  │
//! │  4. Resolver queries:  registry.resolve::<DoorCapability>()     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let registry = Registry::new(RegistrationPolicy::LastWins);
//! registry.register::<DoorCapability, _>("wooden", WoodenDoor::from_config)?;
//! registry.seal()?;
//!
//! let door = registry.resolve::<DoorCapability>()?;
//! ```

pub mod catalog;
pub mod store;

pub use catalog::{
    STRATEGIES, StrategyEntry, install_all_strategies, install_strategy, list_strategies,
    strategies_for,
};
pub use store::{
    ImplementationConfig, Instance, Lifetime, RegistrationOptions, RegistrationPolicy, Registry,
};
