//! Capability contracts
//!
//! A capability is a named, immutable method set. The [`Capability`] trait
//! binds a descriptor to the trait-object type that implementations produce,
//! so registries can stay keyed by name while callers get typed instances.
//!
//! ```ignore
//! pub struct DoorCapability;
//!
//! impl Capability for DoorCapability {
//!     type Object = dyn Door;
//!     const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
//!         name: "door",
//!         description: "Opens and closes an enclosure",
//!         methods: &["material", "open", "close"],
//!     };
//! }
//! ```

use std::fmt;

/// Static description of a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilityDescriptor {
    /// Unique capability name, used as the registry key
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Method names making up the contract
    pub methods: &'static [&'static str],
}

impl fmt::Display for CapabilityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.methods.join(", "))
    }
}

/// Binds a capability descriptor to the object type its implementations provide
pub trait Capability: 'static {
    /// Trait object handed to consumers (e.g. `dyn Door`)
    type Object: ?Sized + Send + Sync + 'static;

    /// The capability's name and method set
    const DESCRIPTOR: CapabilityDescriptor;

    /// Shortcut for `DESCRIPTOR.name`
    fn name() -> &'static str {
        Self::DESCRIPTOR.name
    }
}
