//! Composer - builds composites from registered strategies
//!
//! ```text
//! CompositionSpec { door: "door", bowl: "bowl" }
//!            │
//!            ▼
//!   resolve every role ──► any unresolved? ──► MissingDependency { all roles }
//!            │
//!            ▼
//!   Parts { door, bowl } ──► T::assemble(parts) ──► Cage
//! ```
//!
//! A composite never constructs a strategy itself; it only takes what the
//! composer resolved for it.

use std::collections::HashMap;
use std::sync::Arc;

use solid_domain::Capability;
use solid_domain::error::{Error, MissingRole, Result};
use tracing::{debug, warn};

use crate::registry::{Instance, Registry};

/// Role → capability mapping for one composite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionSpec {
    roles: Vec<(String, String)>,
}

impl CompositionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `role` to a capability name; rebinding a role replaces it
    pub fn role(mut self, role: impl Into<String>, capability: impl Into<String>) -> Self {
        let role = role.into();
        let capability = capability.into();
        match self.roles.iter_mut().find(|(r, _)| *r == role) {
            Some(binding) => binding.1 = capability,
            None => self.roles.push((role, capability)),
        }
        self
    }

    /// Bind `role` to capability `C`
    pub fn require<C: Capability>(self, role: impl Into<String>) -> Self {
        self.role(role, C::name())
    }

    /// Bindings in declaration order
    pub fn roles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(r, c)| (r.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Resolved instances keyed by role
#[derive(Debug, Default)]
pub struct Parts {
    instances: HashMap<String, Instance>,
}

impl Parts {
    /// Take the instance bound to `role` as capability `C`
    pub fn take<C: Capability>(&mut self, role: &str) -> Result<Arc<C::Object>> {
        let instance = self
            .instances
            .remove(role)
            .ok_or_else(|| Error::MissingDependency {
                roles: vec![MissingRole {
                    role: role.to_string(),
                    capability: C::name().to_string(),
                }],
            })?;
        instance.downcast::<C>()
    }

    /// Implementation name bound to `role`, if any
    pub fn implementation(&self, role: &str) -> Option<&str> {
        self.instances.get(role).map(Instance::implementation)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// A high-level object built from injected capabilities
pub trait Composite: Sized {
    /// Default role → capability mapping
    fn blueprint() -> CompositionSpec;

    /// Build the composite from resolved parts
    fn assemble(parts: Parts) -> Result<Self>;
}

/// Resolves composition specs against a registry
#[derive(Debug, Clone)]
pub struct Composer {
    registry: Arc<Registry>,
}

impl Composer {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Resolve every role of `spec` without building anything
    ///
    /// All unresolved roles are reported together in one
    /// `MissingDependency`; factory failures abort immediately.
    pub fn resolve_parts(&self, spec: &CompositionSpec) -> Result<Parts> {
        let mut parts = Parts::default();
        let mut missing = Vec::new();

        for (role, capability) in spec.roles() {
            match self.registry.resolve_erased(capability) {
                Ok(instance) => {
                    parts.instances.insert(role.to_string(), instance);
                }
                Err(Error::UnresolvedCapability { .. }) => missing.push(MissingRole {
                    role: role.to_string(),
                    capability: capability.to_string(),
                }),
                Err(err) => return Err(err),
            }
        }

        if !missing.is_empty() {
            warn!(
                missing = missing.len(),
                roles = ?missing.iter().map(|m| m.role.as_str()).collect::<Vec<_>>(),
                "Composition failed"
            );
            return Err(Error::MissingDependency { roles: missing });
        }

        Ok(parts)
    }

    /// Build `T` from `spec`
    pub fn compose<T: Composite>(&self, spec: &CompositionSpec) -> Result<T> {
        let parts = self.resolve_parts(spec)?;
        let composite = T::assemble(parts)?;
        debug!(
            composite = std::any::type_name::<T>(),
            roles = spec.len(),
            "Composed"
        );
        Ok(composite)
    }

    /// Build `T` from its own blueprint
    pub fn compose_default<T: Composite>(&self) -> Result<T> {
        self.compose(&T::blueprint())
    }
}
