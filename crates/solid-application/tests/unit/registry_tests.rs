//! Tests for the capability registry and strategy catalogue
//!
//! Uses `extern crate solid_providers` to force linkme registration of real
//! strategies.

// Force linkme registration of all strategies from solid-providers
extern crate solid_providers;

use std::sync::Arc;
use std::thread;

use solid_application::registry::*;
use solid_domain::Error;
use solid_domain::ports::*;
use solid_providers::{FruitBowl, IronDoor, WoodenDoor};

fn wooden(_: &ImplementationConfig) -> solid_domain::Result<Arc<dyn Door>> {
    Ok(Arc::new(WoodenDoor::new()))
}

fn iron(_: &ImplementationConfig) -> solid_domain::Result<Arc<dyn Door>> {
    Ok(Arc::new(IronDoor))
}

fn fruit(_: &ImplementationConfig) -> solid_domain::Result<Arc<dyn Bowl>> {
    Ok(Arc::new(FruitBowl))
}

// ============================================================================
// Registration and resolution
// ============================================================================

#[cfg(test)]
mod resolution_tests {
    use super::*;

    #[test]
    fn test_resolve_single_registration() {
        let registry = Registry::default();
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("register");

        let door = registry.resolve::<DoorCapability>().expect("resolve");
        assert_eq!(door.material(), "wooden");
        assert!(door.open().contains("open"));
        assert!(door.close().contains("shut"));
    }

    #[test]
    fn test_resolve_unregistered_capability_fails() {
        let registry = Registry::default();

        match registry.resolve::<BowlCapability>() {
            Err(Error::UnresolvedCapability { capability }) => assert_eq!(capability, "bowl"),
            Err(other) => panic!("Expected UnresolvedCapability, got {other}"),
            Ok(_) => panic!("Expected UnresolvedCapability"),
        }
    }

    #[test]
    fn test_last_wins_resolves_second_registration() {
        let registry = Registry::new(RegistrationPolicy::LastWins);
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("first");
        registry
            .register::<DoorCapability, _>("iron", iron)
            .expect("second");

        let door = registry.resolve::<DoorCapability>().expect("resolve");
        assert_eq!(door.material(), "iron");
        assert_eq!(registry.implementations("door"), vec!["wooden", "iron"]);
    }

    #[test]
    fn test_strict_rejects_second_registration() {
        let registry = Registry::new(RegistrationPolicy::Strict);
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("first");

        match registry.register::<DoorCapability, _>("iron", iron) {
            Err(Error::DuplicateRegistration {
                capability,
                implementation,
            }) => {
                assert_eq!(capability, "door");
                assert_eq!(implementation, "iron");
            }
            other => panic!("Expected DuplicateRegistration, got {other:?}"),
        }

        // The original registration is untouched
        let door = registry.resolve::<DoorCapability>().expect("resolve");
        assert_eq!(door.material(), "wooden");
    }

    #[test]
    fn test_explicit_selection_overrides_last_registered() {
        let registry = Registry::default();
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("first");
        registry
            .register::<DoorCapability, _>("iron", iron)
            .expect("second");
        registry.select("door", "wooden").expect("select");

        assert_eq!(
            registry.resolve::<DoorCapability>().expect("resolve").material(),
            "wooden"
        );
        assert_eq!(
            registry
                .resolve_named::<DoorCapability>("iron")
                .expect("named")
                .material(),
            "iron"
        );
    }

    #[test]
    fn test_select_unknown_implementation_fails() {
        let registry = Registry::default();
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("register");

        match registry.select("door", "glass") {
            Err(Error::UnknownImplementation { available, .. }) => {
                assert_eq!(available, vec!["wooden"]);
            }
            other => panic!("Expected UnknownImplementation, got {other:?}"),
        }
    }

    #[test]
    fn test_sealed_registry_refuses_registration() {
        let registry = Registry::default();
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("register");
        registry.seal().expect("seal");

        assert!(registry.is_sealed());
        assert!(matches!(
            registry.register::<BowlCapability, _>("fruit", fruit),
            Err(Error::RegistrySealed { .. })
        ));
        assert!(matches!(
            registry.select("door", "wooden"),
            Err(Error::RegistrySealed { .. })
        ));
        // Resolution keeps working
        assert!(registry.resolve::<DoorCapability>().is_ok());
    }

    #[test]
    fn test_factory_error_is_surfaced() {
        let registry = Registry::default();
        registry
            .register::<DoorCapability, _>("broken", |config| {
                Err(Error::factory(&config.implementation, "no hinges"))
            })
            .expect("register");

        match registry.resolve::<DoorCapability>() {
            Err(Error::Factory { implementation, .. }) => assert_eq!(implementation, "broken"),
            Err(other) => panic!("Expected Factory error, got {other}"),
            Ok(_) => panic!("Expected Factory error"),
        }
    }

    #[test]
    fn test_concurrent_resolution() {
        let registry = Arc::new(Registry::default());
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("register");
        registry.seal().expect("seal");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| registry.resolve::<DoorCapability>().map(|d| d.material().len()))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();

        for handle in handles {
            let resolved = handle.join().expect("thread").expect("resolve");
            assert_eq!(resolved.len(), 100);
        }
    }

    #[test]
    fn test_capabilities_listing() {
        let registry = Registry::default();
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("door");
        registry
            .register::<BowlCapability, _>("fruit", fruit)
            .expect("bowl");

        let names: Vec<_> = registry.capabilities().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["bowl", "door"]);
        assert!(registry.contains("door"));
        assert!(!registry.contains("tap"));
    }
}

// ============================================================================
// Capability contract tests
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;
    use solid_domain::{Capability, CapabilityDescriptor};

    /// Declares no methods at all
    struct SilentCapability;

    impl Capability for SilentCapability {
        type Object = dyn Door;
        const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
            name: "silent",
            description: "A contract with nothing in it",
            methods: &[],
        };
    }

    /// Reuses the "door" name for bowl objects
    struct BowlAsDoorCapability;

    impl Capability for BowlAsDoorCapability {
        type Object = dyn Bowl;
        const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
            name: "door",
            description: "Claims to be a door",
            methods: &["food", "fill"],
        };
    }

    #[test]
    fn test_capability_without_methods_is_rejected() {
        let registry = Registry::default();

        match registry.register::<SilentCapability, _>("wooden", wooden) {
            Err(Error::InvalidCapability { capability, .. }) => assert_eq!(capability, "silent"),
            other => panic!("Expected InvalidCapability, got {other:?}"),
        }
        assert!(!registry.contains("silent"));
    }

    #[test]
    fn test_name_reused_for_other_object_type_is_rejected() {
        let registry = Registry::default();
        registry
            .register::<DoorCapability, _>("wooden", wooden)
            .expect("door");

        match registry.register::<BowlAsDoorCapability, _>("fruit", fruit) {
            Err(Error::CapabilityMismatch { capability, .. }) => assert_eq!(capability, "door"),
            other => panic!("Expected CapabilityMismatch, got {other:?}"),
        }

        // The original registration is untouched
        let door = registry.resolve::<DoorCapability>().expect("resolve");
        assert_eq!(door.material(), "wooden");
        assert_eq!(registry.implementations("door"), vec!["wooden".to_string()]);
    }
}

// ============================================================================
// Catalogue tests - real strategy registration
// ============================================================================

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn test_catalogue_contains_door_strategies() {
        assert_eq!(strategies_for("door"), vec!["iron", "wooden"]);
        assert_eq!(strategies_for("double_tap"), vec!["double_tap_button", "super_button"]);
    }

    #[test]
    fn test_catalogue_entries_have_descriptions() {
        let strategies = list_strategies();
        assert!(!strategies.is_empty());

        for (capability, name, description) in &strategies {
            assert!(!capability.is_empty());
            assert!(!name.is_empty());
            assert!(
                !description.is_empty(),
                "Strategy '{capability}/{name}' should have a description"
            );
        }
    }

    #[test]
    fn test_install_strategy_by_name() {
        let registry = Registry::new(RegistrationPolicy::Strict);
        install_strategy(
            &registry,
            "bowl",
            "meat",
            RegistrationOptions::default().with_setting("grams", "200"),
        )
        .expect("install");

        let bowl = registry.resolve::<BowlCapability>().expect("resolve");
        assert_eq!(bowl.fill(), "bowl filled with 200g of meat");
        assert_eq!(registry.implementations("bowl"), vec!["meat"]);
    }

    #[test]
    fn test_install_unknown_strategy_lists_available() {
        let registry = Registry::default();
        match install_strategy(&registry, "door", "glass", RegistrationOptions::default()) {
            Err(Error::UnknownImplementation { available, .. }) => {
                assert_eq!(available, vec!["iron", "wooden"]);
            }
            other => panic!("Expected UnknownImplementation, got {other:?}"),
        }
    }

    #[test]
    fn test_install_all_strategies() {
        let registry = Registry::default();
        let installed = install_all_strategies(&registry).expect("install all");

        assert_eq!(installed, list_strategies().len());
        for descriptor in solid_domain::ports::all_capabilities() {
            assert!(
                registry.contains(descriptor.name),
                "No strategy installed for {}",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_install_all_fails_under_strict_policy() {
        let registry = Registry::new(RegistrationPolicy::Strict);
        assert!(matches!(
            install_all_strategies(&registry),
            Err(Error::DuplicateRegistration { .. })
        ));
    }
}
