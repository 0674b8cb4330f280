//! Bowl strategies

use std::sync::Arc;

use solid_application::registry::{ImplementationConfig, STRATEGIES, StrategyEntry};
use solid_domain::Capability;
use solid_domain::error::Result;
use solid_domain::ports::{Bowl, BowlCapability};

#[derive(Debug, Clone, Default)]
pub struct FruitBowl;

impl Bowl for FruitBowl {
    fn food(&self) -> &str {
        "fruit"
    }

    fn fill(&self) -> String {
        "bowl filled with fruit".to_string()
    }
}

/// Serves meat in portions of `grams` (setting, default 500)
#[derive(Debug, Clone)]
pub struct MeatBowl {
    grams: u32,
}

impl MeatBowl {
    pub fn new(grams: u32) -> Self {
        Self { grams }
    }

    pub fn from_config(config: &ImplementationConfig) -> Result<Arc<dyn Bowl>> {
        let grams = match config.setting("grams") {
            Some(raw) => raw.parse().map_err(|_| {
                crate::Error::factory(&config.implementation, format!("invalid grams '{raw}'"))
            })?,
            None => 500,
        };
        Ok(Arc::new(Self::new(grams)))
    }
}

impl Bowl for MeatBowl {
    fn food(&self) -> &str {
        "meat"
    }

    fn fill(&self) -> String {
        format!("bowl filled with {}g of meat", self.grams)
    }
}

fn fruit_bowl(_: &ImplementationConfig) -> Result<Arc<dyn Bowl>> {
    Ok(Arc::new(FruitBowl))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STRATEGIES)]
static FRUIT_BOWL: StrategyEntry = StrategyEntry {
    capability: BowlCapability::DESCRIPTOR.name,
    name: "fruit",
    description: "Bowl of fruit",
    install: |registry, options| registry.register_with::<BowlCapability, _>(options, fruit_bowl),
};

#[linkme::distributed_slice(STRATEGIES)]
static MEAT_BOWL: StrategyEntry = StrategyEntry {
    capability: BowlCapability::DESCRIPTOR.name,
    name: "meat",
    description: "Bowl of meat, portion size from the `grams` setting",
    install: |registry, options| {
        registry.register_with::<BowlCapability, _>(options, MeatBowl::from_config)
    },
};
