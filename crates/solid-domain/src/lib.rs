//! Domain Layer - SOLID capability playground
//!
//! Holds the contracts every other layer builds on:
//!
//! - `capability`: capability descriptors and the [`Capability`] binding trait
//! - `ports`: one small trait per capability (doors, bowls, invoices, payments,
//!   gestures, activity logging, remote calls)
//! - `entities`: the plain data the strategies operate on
//! - `error`: the single error type used across the workspace
//!
//! This crate has no knowledge of registries or concrete strategies.

pub mod capability;
pub mod entities;
pub mod error;
pub mod ports;

pub use capability::{Capability, CapabilityDescriptor};
pub use entities::{Invoice, Product, Receipt};
pub use error::{Error, MissingRole, Result};
