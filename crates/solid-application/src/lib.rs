//! Application Layer - SOLID capability playground
//!
//! This crate turns capability contracts into working object graphs:
//!
//! - `registry`: capability name → registered strategy factories, plus the
//!   link-time strategy catalogue
//! - `composer`: builds high-level composites by resolving every role they
//!   need and injecting the instances
//! - `lint`: design-time Interface Segregation checks on capability descriptors
//! - `use_cases`: the composites themselves (cages, invoice and payment services)
//!
//! ## Dependencies
//!
//! This crate depends only on `solid-domain`. Concrete strategies live in
//! `solid-providers` and register themselves into [`registry::STRATEGIES`].

pub mod composer;
pub mod lint;
pub mod registry;
pub mod use_cases;

pub use composer::{Composer, Composite, CompositionSpec, Parts};
pub use registry::{
    ImplementationConfig, Instance, Lifetime, RegistrationOptions, RegistrationPolicy, Registry,
};
