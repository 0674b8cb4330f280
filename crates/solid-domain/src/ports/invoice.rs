//! Invoice capabilities
//!
//! Printing and saving are separate capabilities so a change to one
//! never touches the other.

use crate::capability::{Capability, CapabilityDescriptor};
use crate::entities::Invoice;
use crate::error::Result;

/// Renders an invoice for display
pub trait InvoicePrinter: Send + Sync {
    fn render(&self, invoice: &Invoice) -> String;
}

/// Stores an invoice somewhere
pub trait InvoicePersistence: Send + Sync {
    /// Save the invoice, returning the location it was stored under
    fn save(&self, invoice: &Invoice) -> Result<String>;
}

/// Capability marker for [`InvoicePrinter`]
pub struct InvoicePrinterCapability;

impl Capability for InvoicePrinterCapability {
    type Object = dyn InvoicePrinter;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "invoice_printer",
        description: "Renders an invoice for display",
        methods: &["render"],
    };
}

/// Capability marker for [`InvoicePersistence`]
pub struct InvoicePersistenceCapability;

impl Capability for InvoicePersistenceCapability {
    type Object = dyn InvoicePersistence;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "invoice_persistence",
        description: "Stores invoices",
        methods: &["save"],
    };
}
