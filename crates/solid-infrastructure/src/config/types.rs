//! Configuration types

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use solid_application::registry::{Lifetime, RegistrationOptions, RegistrationPolicy};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Registry behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// What happens on a second registration for a capability
    pub policy: RegistrationPolicy,
    /// Lifetime used when a strategy does not set one
    pub lifetime: Lifetime,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Strategy chosen for one capability
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Catalogue name of the strategy (e.g. "iron")
    pub implementation: String,
    /// Overrides `registry.lifetime`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<Lifetime>,
    /// Settings handed to the strategy factory
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub settings: HashMap<String, String>,
}

impl StrategyConfig {
    pub fn new(implementation: impl Into<String>) -> Self {
        Self {
            implementation: implementation.into(),
            ..Default::default()
        }
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Registration options for this strategy
    pub fn to_options(&self) -> RegistrationOptions {
        RegistrationOptions {
            implementation: self.implementation.clone(),
            lifetime: self.lifetime,
            settings: self.settings.clone(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Registry behaviour
    pub registry: RegistryConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Capability name → chosen strategy
    pub strategies: BTreeMap<String, StrategyConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let strategies = [
            ("activity_log", StrategyConfig::new("tracing")),
            ("bowl", StrategyConfig::new("fruit")),
            ("door", StrategyConfig::new("wooden")),
            ("double_tap", StrategyConfig::new("super_button")),
            (
                "invoice_persistence",
                StrategyConfig::new("memory").with_lifetime(Lifetime::Singleton),
            ),
            ("invoice_printer", StrategyConfig::new("plain")),
            ("long_press", StrategyConfig::new("super_button")),
            ("payment_method", StrategyConfig::new("credit_card")),
            ("remote_api", StrategyConfig::new("mock")),
            ("tap", StrategyConfig::new("super_button")),
        ]
        .into_iter()
        .map(|(capability, strategy)| (capability.to_string(), strategy))
        .collect();

        Self {
            registry: RegistryConfig::default(),
            logging: LoggingConfig::default(),
            strategies,
        }
    }
}

impl AppConfig {
    /// Configured strategy for a capability
    pub fn strategy(&self, capability: &str) -> Option<&StrategyConfig> {
        self.strategies.get(capability)
    }
}
