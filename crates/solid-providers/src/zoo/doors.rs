//! Door strategies

use std::sync::Arc;

use solid_application::registry::{ImplementationConfig, STRATEGIES, StrategyEntry};
use solid_domain::Capability;
use solid_domain::error::Result;
use solid_domain::ports::{Door, DoorCapability};

/// A wooden door; creaks unless configured otherwise
#[derive(Debug, Clone)]
pub struct WoodenDoor {
    sound: String,
}

impl WoodenDoor {
    pub fn new() -> Self {
        Self {
            sound: "creak".to_string(),
        }
    }

    /// Build from config; reads the optional `sound` setting
    pub fn from_config(config: &ImplementationConfig) -> Result<Arc<dyn Door>> {
        Ok(Arc::new(Self {
            sound: config.setting_or("sound", "creak").to_string(),
        }))
    }
}

impl Default for WoodenDoor {
    fn default() -> Self {
        Self::new()
    }
}

impl Door for WoodenDoor {
    fn material(&self) -> &str {
        "wooden"
    }

    fn open(&self) -> String {
        format!("wooden door swings open ({})", self.sound)
    }

    fn close(&self) -> String {
        "wooden door shut".to_string()
    }
}

/// An iron door
#[derive(Debug, Clone, Default)]
pub struct IronDoor;

impl Door for IronDoor {
    fn material(&self) -> &str {
        "iron"
    }

    fn open(&self) -> String {
        "iron door unbolted".to_string()
    }

    fn close(&self) -> String {
        "iron door bolted".to_string()
    }
}

fn iron_door(_: &ImplementationConfig) -> Result<Arc<dyn Door>> {
    Ok(Arc::new(IronDoor))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STRATEGIES)]
static WOODEN_DOOR: StrategyEntry = StrategyEntry {
    capability: DoorCapability::DESCRIPTOR.name,
    name: "wooden",
    description: "Wooden door with a configurable sound",
    install: |registry, options| {
        registry.register_with::<DoorCapability, _>(options, WoodenDoor::from_config)
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static IRON_DOOR: StrategyEntry = StrategyEntry {
    capability: DoorCapability::DESCRIPTOR.name,
    name: "iron",
    description: "Heavy iron door",
    install: |registry, options| registry.register_with::<DoorCapability, _>(options, iron_door),
};
