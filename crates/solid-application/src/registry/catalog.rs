//! Strategy Catalogue
//!
//! Auto-registration system for strategies using linkme distributed slices.
//! Strategies register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime; nothing here knows the concrete types.

use solid_domain::error::{Error, Result};

use super::store::{RegistrationOptions, Registry};

/// Catalogue entry for a strategy
///
/// Each strategy implementation registers itself with this entry. `install`
/// registers the strategy's factory into a [`Registry`] under its capability.
pub struct StrategyEntry {
    /// Capability the strategy satisfies (e.g. "door")
    pub capability: &'static str,
    /// Unique strategy name within the capability (e.g. "wooden")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Registers the strategy's factory
    pub install: fn(&Registry, RegistrationOptions) -> Result<()>,
}

#[linkme::distributed_slice]
pub static STRATEGIES: [StrategyEntry] = [..];

fn sorted_entries() -> Vec<&'static StrategyEntry> {
    let mut entries: Vec<&'static StrategyEntry> = STRATEGIES.iter().collect();
    entries.sort_by_key(|e| (e.capability, e.name));
    entries
}

/// List all catalogued strategies as (capability, name, description)
pub fn list_strategies() -> Vec<(&'static str, &'static str, &'static str)> {
    sorted_entries()
        .into_iter()
        .map(|e| (e.capability, e.name, e.description))
        .collect()
}

/// Catalogued strategy names for one capability
pub fn strategies_for(capability: &str) -> Vec<&'static str> {
    sorted_entries()
        .into_iter()
        .filter(|e| e.capability == capability)
        .map(|e| e.name)
        .collect()
}

/// Install one catalogued strategy into `registry`
///
/// `options.implementation` names the strategy; an empty name is taken
/// from `name`.
pub fn install_strategy(
    registry: &Registry,
    capability: &str,
    name: &str,
    mut options: RegistrationOptions,
) -> Result<()> {
    let entry = STRATEGIES
        .iter()
        .find(|e| e.capability == capability && e.name == name)
        .ok_or_else(|| Error::UnknownImplementation {
            capability: capability.to_string(),
            implementation: name.to_string(),
            available: strategies_for(capability)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })?;

    if options.implementation.is_empty() {
        options.implementation = entry.name.to_string();
    }
    (entry.install)(registry, options)
}

/// Install every catalogued strategy, ordered by capability then name
pub fn install_all_strategies(registry: &Registry) -> Result<usize> {
    let entries = sorted_entries();
    for entry in &entries {
        (entry.install)(registry, RegistrationOptions::new(entry.name))?;
    }
    Ok(entries.len())
}
