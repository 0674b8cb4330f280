//! Tests for the composer

use std::sync::Arc;

use solid_application::registry::{ImplementationConfig, Registry};
use solid_application::use_cases::Cage;
use solid_application::{Composer, Composite, CompositionSpec};
use solid_domain::Error;
use solid_domain::ports::{Bowl, BowlCapability, Door, DoorCapability};
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

fn cage_spec() -> CompositionSpec {
    CompositionSpec::new().role("door", "door").role("bowl", "bowl")
}

#[test]
fn test_compose_cage_with_wooden_door_and_fruit_bowl() {
    let registry = Registry::default();
    registry
        .register::<DoorCapability, _>("wooden", wooden)
        .expect("door");
    registry
        .register::<BowlCapability, _>("fruit", fruit)
        .expect("bowl");

    let composer = Composer::new(Arc::new(registry));
    let cage: Cage = composer.compose(&cage_spec()).expect("compose");

    assert_eq!(cage.door().material(), "wooden");
    assert_eq!(cage.bowl().food(), "fruit");
    assert_eq!(cage.describe(), "wooden door, fruit bowl");
}

#[test]
fn test_compose_reports_missing_bowl() {
    let registry = Registry::default();
    registry
        .register::<DoorCapability, _>("wooden", wooden)
        .expect("door");

    let composer = Composer::new(Arc::new(registry));
    match composer.compose::<Cage>(&cage_spec()) {
        Err(Error::MissingDependency { roles }) => {
            assert_eq!(roles.len(), 1);
            assert_eq!(roles[0].role, "bowl");
            assert_eq!(roles[0].capability, "bowl");
        }
        Err(other) => panic!("Expected MissingDependency, got {other}"),
        Ok(_) => panic!("Expected MissingDependency"),
    }
}

#[test]
fn test_compose_reports_every_missing_role() {
    let composer = Composer::new(Arc::new(Registry::default()));
    let error = composer
        .compose::<Cage>(&cage_spec())
        .err()
        .expect("should fail");

    assert_eq!(error.missing_roles(), vec!["door", "bowl"]);
    let message = error.to_string();
    assert!(message.contains("door"));
    assert!(message.contains("bowl"));
}

#[test]
fn test_swapping_implementation_needs_no_composite_change() {
    let registry = Registry::default();
    registry
        .register::<DoorCapability, _>("wooden", wooden)
        .expect("wooden");
    registry
        .register::<BowlCapability, _>("fruit", fruit)
        .expect("bowl");
    let registry = Arc::new(registry);
    let composer = Composer::new(Arc::clone(&registry));

    let before: Cage = composer.compose_default().expect("before");
    registry
        .register::<DoorCapability, _>("iron", iron)
        .expect("iron");
    let after: Cage = composer.compose_default().expect("after");

    assert_eq!(before.door().material(), "wooden");
    assert_eq!(after.door().material(), "iron");
}

#[test]
fn test_spec_can_rebind_role_to_another_capability() {
    // A role bound to a capability of the wrong type is rejected by the composite
    let registry = Registry::default();
    registry
        .register::<DoorCapability, _>("wooden", wooden)
        .expect("door");
    registry
        .register::<BowlCapability, _>("fruit", fruit)
        .expect("bowl");

    let composer = Composer::new(Arc::new(registry));
    let spec = Cage::blueprint().role("door", "bowl");
    assert!(matches!(
        composer.compose::<Cage>(&spec),
        Err(Error::CapabilityMismatch { .. })
    ));
}

#[test]
fn test_factory_failure_aborts_composition() {
    let registry = Registry::default();
    registry
        .register::<DoorCapability, _>("broken", |config| {
            Err(Error::factory(&config.implementation, "jammed"))
        })
        .expect("door");

    let composer = Composer::new(Arc::new(registry));
    assert!(matches!(
        composer.compose::<Cage>(&cage_spec()),
        Err(Error::Factory { .. })
    ));
}

#[test]
fn test_resolve_parts_exposes_implementations() {
    let registry = Registry::default();
    registry
        .register::<DoorCapability, _>("iron", iron)
        .expect("door");
    registry
        .register::<BowlCapability, _>("fruit", fruit)
        .expect("bowl");

    let composer = Composer::new(Arc::new(registry));
    let parts = composer.resolve_parts(&cage_spec()).expect("parts");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts.implementation("door"), Some("iron"));
    assert_eq!(parts.implementation("bowl"), Some("fruit"));
}
