//! Capability registry
//!
//! Registrations are type-erased behind `Arc<dyn Any>` so the registry can be
//! keyed by capability name, and are downcast back to `Arc<C::Object>` on
//! typed resolution. The map sits behind a `RwLock`: writes only happen during
//! the init phase, resolution afterwards is a shared read.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use solid_domain::error::{Error, Result};
use solid_domain::{Capability, CapabilityDescriptor};
use tracing::debug;

/// What happens when a capability already has a registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// Keep every registration; the latest one becomes the default
    #[default]
    LastWins,
    /// One registration per capability; the second one fails
    Strict,
}

/// How often a registration's factory runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// Fresh instance per resolution
    #[default]
    Transient,
    /// One cached instance per registration
    Singleton,
}

/// Configuration handed to a strategy factory
///
/// Strategies are stateless apart from what they read from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplementationConfig {
    /// Implementation name (e.g. "wooden", "credit_card")
    pub implementation: String,
    /// Strategy-specific settings
    pub settings: HashMap<String, String>,
}

impl ImplementationConfig {
    /// Create a config for the given implementation name
    pub fn new(implementation: impl Into<String>) -> Self {
        Self {
            implementation: implementation.into(),
            ..Default::default()
        }
    }

    /// Add a setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Look up a setting
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Look up a setting, falling back to `default`
    pub fn setting_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.setting(key).unwrap_or(default)
    }
}

/// Options for a single registration
#[derive(Debug, Clone, Default)]
pub struct RegistrationOptions {
    /// Implementation name
    pub implementation: String,
    /// Overrides the registry's default lifetime
    pub lifetime: Option<Lifetime>,
    /// Settings passed to the factory
    pub settings: HashMap<String, String>,
}

impl RegistrationOptions {
    pub fn new(implementation: impl Into<String>) -> Self {
        Self {
            implementation: implementation.into(),
            ..Default::default()
        }
    }

    /// Set the lifetime
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Add a factory setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

type ErasedObject = Arc<dyn Any + Send + Sync>;
type ErasedFactory = Box<dyn Fn(&ImplementationConfig) -> Result<ErasedObject> + Send + Sync>;

/// A resolved, type-erased strategy instance
///
/// Produced by [`Registry::resolve_erased`] and turned back into a typed
/// instance with [`Instance::downcast`].
#[derive(Clone)]
pub struct Instance {
    capability: String,
    implementation: String,
    value: ErasedObject,
}

impl Instance {
    /// Capability the instance was resolved for
    pub fn capability(&self) -> &str {
        &self.capability
    }

    /// Implementation that built the instance
    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    /// Recover the typed instance
    pub fn downcast<C: Capability>(&self) -> Result<Arc<C::Object>> {
        self.value
            .downcast_ref::<Arc<C::Object>>()
            .cloned()
            .ok_or_else(|| Error::CapabilityMismatch {
                capability: self.capability.clone(),
                expected: std::any::type_name::<C::Object>(),
            })
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("capability", &self.capability)
            .field("implementation", &self.implementation)
            .finish_non_exhaustive()
    }
}

struct Registration {
    config: ImplementationConfig,
    lifetime: Lifetime,
    factory: ErasedFactory,
    singleton: OnceCell<ErasedObject>,
}

impl Registration {
    fn build(&self) -> Result<ErasedObject> {
        match self.lifetime {
            Lifetime::Transient => (self.factory)(&self.config),
            Lifetime::Singleton => self
                .singleton
                .get_or_try_init(|| (self.factory)(&self.config))
                .cloned(),
        }
    }
}

struct CapabilityEntry {
    descriptor: CapabilityDescriptor,
    marker: TypeId,
    registrations: Vec<Arc<Registration>>,
    selected: Option<usize>,
}

impl CapabilityEntry {
    fn position(&self, implementation: &str) -> Option<usize> {
        self.registrations
            .iter()
            .position(|r| r.config.implementation == implementation)
    }

    fn names(&self) -> Vec<String> {
        self.registrations
            .iter()
            .map(|r| r.config.implementation.clone())
            .collect()
    }

    fn default_registration(&self) -> Option<&Arc<Registration>> {
        match self.selected {
            Some(index) => self.registrations.get(index),
            None => self.registrations.last(),
        }
    }
}

#[derive(Default)]
struct RegistryState {
    entries: HashMap<&'static str, CapabilityEntry>,
    sealed: bool,
}

/// Capability → strategy registry
pub struct Registry {
    policy: RegistrationPolicy,
    default_lifetime: Lifetime,
    state: RwLock<RegistryState>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistrationPolicy::default())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("policy", &self.policy)
            .field("default_lifetime", &self.default_lifetime)
            .field("capabilities", &self.capabilities())
            .field("sealed", &self.is_sealed())
            .finish()
    }
}

impl Registry {
    /// Create an empty registry with the given policy
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self {
            policy,
            default_lifetime: Lifetime::default(),
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Set the lifetime used when a registration does not name one
    pub fn with_default_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.default_lifetime = lifetime;
        self
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, RegistryState>> {
        self.state
            .read()
            .map_err(|_| Error::internal("registry lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, RegistryState>> {
        self.state
            .write()
            .map_err(|_| Error::internal("registry lock poisoned"))
    }

    /// Register a factory with default options
    pub fn register<C, F>(&self, implementation: &str, factory: F) -> Result<()>
    where
        C: Capability,
        F: Fn(&ImplementationConfig) -> Result<Arc<C::Object>> + Send + Sync + 'static,
    {
        self.register_with::<C, F>(RegistrationOptions::new(implementation), factory)
    }

    /// Register a factory for capability `C`
    ///
    /// Fails with `DuplicateRegistration` under the strict policy when `C`
    /// already has a registration, and with `RegistrySealed` once
    /// [`Registry::seal`] has been called.
    pub fn register_with<C, F>(&self, options: RegistrationOptions, factory: F) -> Result<()>
    where
        C: Capability,
        F: Fn(&ImplementationConfig) -> Result<Arc<C::Object>> + Send + Sync + 'static,
    {
        let descriptor = C::DESCRIPTOR;
        if descriptor.methods.is_empty() {
            return Err(Error::InvalidCapability {
                capability: descriptor.name.to_string(),
                message: "a capability must declare at least one method".to_string(),
            });
        }

        let mut state = self.write()?;
        if state.sealed {
            return Err(Error::RegistrySealed {
                capability: descriptor.name.to_string(),
            });
        }

        let entry = state
            .entries
            .entry(descriptor.name)
            .or_insert_with(|| CapabilityEntry {
                descriptor,
                marker: TypeId::of::<C>(),
                registrations: Vec::new(),
                selected: None,
            });

        if entry.marker != TypeId::of::<C>() {
            return Err(Error::CapabilityMismatch {
                capability: descriptor.name.to_string(),
                expected: std::any::type_name::<C::Object>(),
            });
        }

        let implementation = options.implementation;
        if self.policy == RegistrationPolicy::Strict && !entry.registrations.is_empty() {
            return Err(Error::duplicate(descriptor.name, implementation));
        }

        let lifetime = options.lifetime.unwrap_or(self.default_lifetime);
        let registration = Registration {
            config: ImplementationConfig {
                implementation: implementation.clone(),
                settings: options.settings,
            },
            lifetime,
            factory: Box::new(move |config: &ImplementationConfig| -> Result<ErasedObject> {
                let object = factory(config)?;
                Ok(Arc::new(object) as ErasedObject)
            }),
            singleton: OnceCell::new(),
        };

        // Re-registering a name replaces it, so the default moves to the newcomer.
        if let Some(index) = entry.position(&implementation) {
            entry.registrations.remove(index);
            entry.selected = None;
        }
        entry.registrations.push(Arc::new(registration));

        debug!(
            capability = descriptor.name,
            implementation = %implementation,
            ?lifetime,
            "Registered strategy"
        );
        Ok(())
    }

    /// Make `implementation` the default for `capability`
    pub fn select(&self, capability: &str, implementation: &str) -> Result<()> {
        let mut state = self.write()?;
        if state.sealed {
            return Err(Error::RegistrySealed {
                capability: capability.to_string(),
            });
        }

        let entry = state
            .entries
            .get_mut(capability)
            .ok_or_else(|| Error::unresolved(capability))?;
        let index =
            entry
                .position(implementation)
                .ok_or_else(|| Error::UnknownImplementation {
                    capability: capability.to_string(),
                    implementation: implementation.to_string(),
                    available: entry.names(),
                })?;
        entry.selected = Some(index);

        debug!(capability, implementation, "Selected strategy");
        Ok(())
    }

    /// End the init phase; later registrations and selections fail
    pub fn seal(&self) -> Result<()> {
        self.write()?.sealed = true;
        Ok(())
    }

    pub fn is_sealed(&self) -> bool {
        self.read().map(|s| s.sealed).unwrap_or(true)
    }

    /// Resolve the default implementation of `C`
    pub fn resolve<C: Capability>(&self) -> Result<Arc<C::Object>> {
        self.resolve_erased(C::name())?.downcast::<C>()
    }

    /// Resolve a specific implementation of `C`
    pub fn resolve_named<C: Capability>(&self, implementation: &str) -> Result<Arc<C::Object>> {
        let registration = {
            let state = self.read()?;
            let entry = state
                .entries
                .get(C::name())
                .ok_or_else(|| Error::unresolved(C::name()))?;
            let index =
                entry
                    .position(implementation)
                    .ok_or_else(|| Error::UnknownImplementation {
                        capability: C::name().to_string(),
                        implementation: implementation.to_string(),
                        available: entry.names(),
                    })?;
            Arc::clone(&entry.registrations[index])
        };

        self.instantiate(C::name(), &registration)?.downcast::<C>()
    }

    /// Resolve the default implementation of a capability by name
    pub fn resolve_erased(&self, capability: &str) -> Result<Instance> {
        // The lock is released before the factory runs.
        let registration = {
            let state = self.read()?;
            state
                .entries
                .get(capability)
                .and_then(CapabilityEntry::default_registration)
                .map(Arc::clone)
                .ok_or_else(|| Error::unresolved(capability))?
        };

        self.instantiate(capability, &registration)
    }

    fn instantiate(&self, capability: &str, registration: &Registration) -> Result<Instance> {
        let value = registration.build()?;
        debug!(
            capability,
            implementation = %registration.config.implementation,
            "Resolved strategy"
        );
        Ok(Instance {
            capability: capability.to_string(),
            implementation: registration.config.implementation.clone(),
            value,
        })
    }

    /// Whether any implementation is registered for `capability`
    pub fn contains(&self, capability: &str) -> bool {
        self.read()
            .map(|s| {
                s.entries
                    .get(capability)
                    .is_some_and(|e| !e.registrations.is_empty())
            })
            .unwrap_or(false)
    }

    /// Descriptors of every registered capability, sorted by name
    pub fn capabilities(&self) -> Vec<CapabilityDescriptor> {
        let mut descriptors: Vec<CapabilityDescriptor> = self
            .read()
            .map(|s| s.entries.values().map(|e| e.descriptor).collect())
            .unwrap_or_default();
        descriptors.sort_by_key(|d| d.name);
        descriptors
    }

    /// Implementation names registered for `capability`, in registration order
    pub fn implementations(&self, capability: &str) -> Vec<String> {
        self.read()
            .ok()
            .and_then(|s| s.entries.get(capability).map(CapabilityEntry::names))
            .unwrap_or_default()
    }

    /// Name of the implementation `resolve` would currently use
    pub fn default_implementation(&self, capability: &str) -> Option<String> {
        self.read().ok().and_then(|s| {
            s.entries
                .get(capability)
                .and_then(CapabilityEntry::default_registration)
                .map(|r| r.config.implementation.clone())
        })
    }
}
