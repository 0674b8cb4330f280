//! Capability Ports
//!
//! One trait per capability, each with a single cohesive responsibility.
//! High-level composites depend on these traits only; concrete strategies
//! live in `solid-providers` and are handed in by the composer.
//!
//! ## Organization
//!
//! - **zoo** - doors and bowls for cages
//! - **invoice** - printing and saving invoices
//! - **payment** - payment methods
//! - **gesture** - tap, double tap and long press handled separately
//! - **infrastructure** - activity logging and remote calls

pub mod gesture;
pub mod infrastructure;
pub mod invoice;
pub mod payment;
pub mod zoo;

pub use gesture::{
    DoubleTap, DoubleTapCapability, LongPress, LongPressCapability, Tap, TapCapability,
};
pub use infrastructure::{ActivityLog, ActivityLogCapability, RemoteApi, RemoteApiCapability};
pub use invoice::{
    InvoicePersistence, InvoicePersistenceCapability, InvoicePrinter, InvoicePrinterCapability,
};
pub use payment::{PaymentMethod, PaymentMethodCapability};
pub use zoo::{Bowl, BowlCapability, Door, DoorCapability};

use crate::capability::CapabilityDescriptor;

/// Descriptors of every capability declared by the domain
pub fn all_capabilities() -> Vec<CapabilityDescriptor> {
    use crate::capability::Capability;

    vec![
        DoorCapability::DESCRIPTOR,
        BowlCapability::DESCRIPTOR,
        InvoicePrinterCapability::DESCRIPTOR,
        InvoicePersistenceCapability::DESCRIPTOR,
        PaymentMethodCapability::DESCRIPTOR,
        TapCapability::DESCRIPTOR,
        DoubleTapCapability::DESCRIPTOR,
        LongPressCapability::DESCRIPTOR,
        ActivityLogCapability::DESCRIPTOR,
        RemoteApiCapability::DESCRIPTOR,
    ]
}
