//! Tests for the composites

use std::sync::Arc;

use solid_application::registry::{
    ImplementationConfig, RegistrationOptions, Registry, install_strategy,
};
use solid_application::use_cases::{ButtonPanel, InvoiceService, PaymentService};
use solid_application::Composer;
use solid_domain::ports::{ActivityLog, ActivityLogCapability};
use solid_domain::{Error, Invoice, Product};
use solid_providers::MemoryActivityLog;

fn registry_with(strategies: &[(&str, &str)], log: Arc<MemoryActivityLog>) -> Arc<Registry> {
    let registry = Registry::default();
    for (capability, name) in strategies {
        install_strategy(&registry, capability, name, RegistrationOptions::default())
            .expect("install");
    }
    registry
        .register::<ActivityLogCapability, _>("shared", move |_: &ImplementationConfig| {
            Ok(Arc::clone(&log) as Arc<dyn ActivityLog>)
        })
        .expect("log");
    Arc::new(registry)
}

#[test]
fn test_invoice_service_prints_and_saves() {
    let log = Arc::new(MemoryActivityLog::new());
    let registry = registry_with(
        &[("invoice_printer", "plain"), ("invoice_persistence", "memory")],
        Arc::clone(&log),
    );
    let service: InvoiceService = Composer::new(registry).compose_default().expect("compose");

    let invoice = Invoice::new(
        vec![Product::new(99.0), Product::new(9.0), Product::new(999.0)],
        20.0,
    );
    let printed = service.print(&invoice);
    let location = service.save(&invoice).expect("save");

    assert!(printed.contains(&format!("Invoice id: {}", invoice.id)));
    assert!(printed.contains("Discounts: 20"));
    assert_eq!(location, "memory://invoices/0");
    assert_eq!(
        log.entries(),
        vec![
            format!("printed invoice {}", invoice.id),
            format!("saved invoice {} to memory://invoices/0", invoice.id),
        ]
    );
}

#[test]
fn test_payment_service_uses_injected_method() {
    let log = Arc::new(MemoryActivityLog::new());
    let registry = registry_with(&[("payment_method", "credit_card")], Arc::clone(&log));
    let service: PaymentService = Composer::new(registry).compose_default().expect("compose");

    let receipt = service.make_payment(200.0).expect("pay");
    assert_eq!(service.method_name(), "credit_card");
    assert_eq!(receipt.message, "Credit card amount 200");
    assert_eq!(log.entries(), vec!["Credit card amount 200"]);
}

#[test]
fn test_payment_service_rejects_non_positive_amounts() {
    let log = Arc::new(MemoryActivityLog::new());
    let registry = registry_with(&[("payment_method", "debit_card")], Arc::clone(&log));
    let service: PaymentService = Composer::new(registry).compose_default().expect("compose");

    assert!(matches!(service.make_payment(0.0), Err(Error::Payment { .. })));
    assert!(matches!(service.make_payment(-5.0), Err(Error::Payment { .. })));
    assert!(matches!(service.make_payment(f64::NAN), Err(Error::Payment { .. })));
    assert!(log.entries().is_empty());
}

#[test]
fn test_button_panel_mixes_buttons() {
    let log = Arc::new(MemoryActivityLog::new());
    let registry = registry_with(
        &[("tap", "super_button"), ("double_tap", "double_tap_button")],
        log,
    );
    let panel: ButtonPanel = Composer::new(registry).compose_default().expect("compose");

    assert_eq!(panel.tap(), "single tap");
    assert_eq!(panel.double_tap(), "double tap button pressed");
}

#[test]
fn test_button_panel_without_tap_is_not_built() {
    let log = Arc::new(MemoryActivityLog::new());
    let registry = registry_with(&[("double_tap", "double_tap_button")], log);

    let error = Composer::new(registry)
        .compose_default::<ButtonPanel>()
        .err()
        .expect("should fail");
    assert_eq!(error.missing_roles(), vec!["tap"]);
}
