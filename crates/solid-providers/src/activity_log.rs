//! Activity log strategies

use std::sync::{Arc, Mutex};

use solid_application::registry::{ImplementationConfig, STRATEGIES, StrategyEntry};
use solid_domain::Capability;
use solid_domain::error::Result;
use solid_domain::ports::{ActivityLog, ActivityLogCapability};
use tracing::info;

/// Emits each record as a `tracing` event under the configured `source`
#[derive(Debug, Clone)]
pub struct TracingActivityLog {
    source: String,
}

impl TracingActivityLog {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn from_config(config: &ImplementationConfig) -> Result<Arc<dyn ActivityLog>> {
        Ok(Arc::new(Self::new(config.setting_or("source", "solid"))))
    }
}

impl ActivityLog for TracingActivityLog {
    fn record(&self, message: &str) {
        info!(source = %self.source, "{message}");
    }
}

/// Collects records in memory
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl ActivityLog for MemoryActivityLog {
    fn record(&self, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(message.to_string());
        }
    }
}

fn memory_log(_: &ImplementationConfig) -> Result<Arc<dyn ActivityLog>> {
    Ok(Arc::new(MemoryActivityLog::new()))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STRATEGIES)]
static TRACING_LOG: StrategyEntry = StrategyEntry {
    capability: ActivityLogCapability::DESCRIPTOR.name,
    name: "tracing",
    description: "Activity log backed by tracing events",
    install: |registry, options| {
        registry.register_with::<ActivityLogCapability, _>(
            options,
            TracingActivityLog::from_config,
        )
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static MEMORY_LOG: StrategyEntry = StrategyEntry {
    capability: ActivityLogCapability::DESCRIPTOR.name,
    name: "memory",
    description: "Activity log kept in memory",
    install: |registry, options| {
        registry.register_with::<ActivityLogCapability, _>(options, memory_log)
    },
};
