//! Zoo capabilities
//!
//! A cage is composed from a door and a bowl rather than subclassed per
//! combination.

use crate::capability::{Capability, CapabilityDescriptor};

/// Opens and closes an enclosure
pub trait Door: Send + Sync {
    /// Material the door is made of
    fn material(&self) -> &str;

    /// Open the door, returning a description of the action
    fn open(&self) -> String;

    /// Close the door, returning a description of the action
    fn close(&self) -> String;
}

/// Holds food for the animals
pub trait Bowl: Send + Sync {
    /// Kind of food the bowl serves
    fn food(&self) -> &str;

    /// Fill the bowl, returning a description of the action
    fn fill(&self) -> String;
}

/// Capability marker for [`Door`]
pub struct DoorCapability;

impl Capability for DoorCapability {
    type Object = dyn Door;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "door",
        description: "Opens and closes an enclosure",
        methods: &["material", "open", "close"],
    };
}

/// Capability marker for [`Bowl`]
pub struct BowlCapability;

impl Capability for BowlCapability {
    type Object = dyn Bowl;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "bowl",
        description: "Holds food for the animals",
        methods: &["food", "fill"],
    };
}
