//! Application bootstrap
//!
//! ```text
//! AppConfig → Registry (policy) → catalogue strategies → selections → lint → seal
//! ```
//!
//! Under the last-wins policy the whole catalogue is installed and the
//! configured strategy is selected per capability. Under the strict policy
//! only the configured strategies are installed, one per capability.

use std::sync::Arc;

use solid_application::lint::{Severity, lint_capabilities};
use solid_application::registry::{
    RegistrationPolicy, Registry, install_all_strategies, install_strategy,
};
use solid_application::Composer;
use solid_domain::error::Result;
use tracing::{error, info, warn};

use crate::config::AppConfig;

/// Everything a caller needs after start-up
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub registry: Arc<Registry>,
    pub composer: Composer,
}

/// Build a sealed registry from configuration
pub fn bootstrap(config: &AppConfig) -> Result<Arc<Registry>> {
    let policy = config.registry.policy;
    let registry = Registry::new(policy).with_default_lifetime(config.registry.lifetime);

    if policy == RegistrationPolicy::LastWins {
        let installed = install_all_strategies(&registry)?;
        info!(installed, "Installed catalogue strategies");
    }

    for (capability, strategy) in &config.strategies {
        // Reinstalling under the same name applies the configured settings.
        install_strategy(
            &registry,
            capability,
            &strategy.implementation,
            strategy.to_options(),
        )?;
        if policy == RegistrationPolicy::LastWins {
            registry.select(capability, &strategy.implementation)?;
        }
        info!(
            capability = %capability,
            implementation = %strategy.implementation,
            "Configured strategy"
        );
    }

    for violation in lint_capabilities(&registry.capabilities()) {
        match violation.severity() {
            Severity::Error => error!(capability = violation.capability(), "{violation}"),
            Severity::Warning => warn!(capability = violation.capability(), "{violation}"),
        }
    }

    registry.seal()?;
    info!(
        ?policy,
        capabilities = registry.capabilities().len(),
        "Registry sealed"
    );
    Ok(Arc::new(registry))
}

/// Bootstrap the registry and wrap it into an [`AppContext`]
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let registry = bootstrap(&config)?;
    let composer = Composer::new(Arc::clone(&registry));
    Ok(AppContext {
        config,
        registry,
        composer,
    })
}
