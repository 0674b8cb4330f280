//! A zoo cage composed from a door and a bowl

use std::sync::Arc;

use solid_domain::error::Result;
use solid_domain::ports::{Bowl, BowlCapability, Door, DoorCapability};

use crate::composer::{Composite, CompositionSpec, Parts};

pub struct Cage {
    door: Arc<dyn Door>,
    bowl: Arc<dyn Bowl>,
}

impl Cage {
    /// Build a cage from already-resolved parts
    pub fn new(door: Arc<dyn Door>, bowl: Arc<dyn Bowl>) -> Self {
        Self { door, bowl }
    }

    pub fn door(&self) -> &dyn Door {
        self.door.as_ref()
    }

    pub fn bowl(&self) -> &dyn Bowl {
        self.bowl.as_ref()
    }

    /// Open the door, fill the bowl, close the door
    pub fn feed(&self) -> Vec<String> {
        vec![self.door.open(), self.bowl.fill(), self.door.close()]
    }

    pub fn lock_up(&self) -> String {
        self.door.close()
    }

    /// One-line summary such as "wooden door, fruit bowl"
    pub fn describe(&self) -> String {
        format!("{} door, {} bowl", self.door.material(), self.bowl.food())
    }
}

impl Composite for Cage {
    fn blueprint() -> CompositionSpec {
        CompositionSpec::new()
            .require::<DoorCapability>("door")
            .require::<BowlCapability>("bowl")
    }

    fn assemble(mut parts: Parts) -> Result<Self> {
        Ok(Self::new(
            parts.take::<DoorCapability>("door")?,
            parts.take::<BowlCapability>("bowl")?,
        ))
    }
}
