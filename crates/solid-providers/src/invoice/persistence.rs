//! Invoice persistence strategies
//!
//! Both keep invoices in process memory; they differ only in how they
//! address what they stored.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use solid_application::registry::{ImplementationConfig, STRATEGIES, StrategyEntry};
use solid_domain::error::{Error, Result};
use solid_domain::ports::{InvoicePersistence, InvoicePersistenceCapability};
use solid_domain::{Capability, Invoice};
use tracing::debug;

/// Appends invoices to an in-memory list
#[derive(Debug, Default)]
pub struct MemoryInvoicePersistence {
    invoices: Mutex<Vec<Invoice>>,
}

impl MemoryInvoicePersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoices saved so far
    pub fn saved(&self) -> Vec<Invoice> {
        self.invoices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl InvoicePersistence for MemoryInvoicePersistence {
    fn save(&self, invoice: &Invoice) -> Result<String> {
        let mut invoices = self
            .invoices
            .lock()
            .map_err(|_| Error::persistence("memory store lock poisoned"))?;
        invoices.push(invoice.clone());
        let location = format!("memory://invoices/{}", invoices.len() - 1);
        debug!(invoice = %invoice.id, %location, "Saved invoice");
        Ok(location)
    }
}

/// Table-like store keyed by invoice id
///
/// Saving the same id twice fails, like a primary key would.
#[derive(Debug)]
pub struct DatabaseInvoicePersistence {
    table: String,
    rows: Mutex<HashMap<String, Invoice>>,
}

impl DatabaseInvoicePersistence {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            rows: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &ImplementationConfig) -> Result<Arc<dyn InvoicePersistence>> {
        Ok(Arc::new(Self::new(config.setting_or("table", "invoices"))))
    }

    pub fn get(&self, id: &str) -> Option<Invoice> {
        self.rows.lock().ok().and_then(|rows| rows.get(id).cloned())
    }
}

impl InvoicePersistence for DatabaseInvoicePersistence {
    fn save(&self, invoice: &Invoice) -> Result<String> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| Error::persistence("database lock poisoned"))?;
        if rows.contains_key(&invoice.id) {
            return Err(Error::persistence(format!(
                "invoice {} already exists in {}",
                invoice.id, self.table
            )));
        }
        rows.insert(invoice.id.clone(), invoice.clone());
        Ok(format!("database://{}/{}", self.table, invoice.id))
    }
}

fn memory_persistence(_: &ImplementationConfig) -> Result<Arc<dyn InvoicePersistence>> {
    Ok(Arc::new(MemoryInvoicePersistence::new()))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STRATEGIES)]
static MEMORY_PERSISTENCE: StrategyEntry = StrategyEntry {
    capability: InvoicePersistenceCapability::DESCRIPTOR.name,
    name: "memory",
    description: "Keeps invoices in a process-local list",
    install: |registry, options| {
        registry.register_with::<InvoicePersistenceCapability, _>(options, memory_persistence)
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static DATABASE_PERSISTENCE: StrategyEntry = StrategyEntry {
    capability: InvoicePersistenceCapability::DESCRIPTOR.name,
    name: "database",
    description: "Table-like invoice store keyed by id (`table` setting)",
    install: |registry, options| {
        registry.register_with::<InvoicePersistenceCapability, _>(
            options,
            DatabaseInvoicePersistence::from_config,
        )
    },
};
