//! Invoice printing and saving, each behind its own capability

use std::sync::Arc;

use solid_domain::error::Result;
use solid_domain::ports::{
    ActivityLog, ActivityLogCapability, InvoicePersistence, InvoicePersistenceCapability,
    InvoicePrinter, InvoicePrinterCapability,
};
use solid_domain::Invoice;

use crate::composer::{Composite, CompositionSpec, Parts};

pub struct InvoiceService {
    printer: Arc<dyn InvoicePrinter>,
    persistence: Arc<dyn InvoicePersistence>,
    log: Arc<dyn ActivityLog>,
}

impl InvoiceService {
    pub fn new(
        printer: Arc<dyn InvoicePrinter>,
        persistence: Arc<dyn InvoicePersistence>,
        log: Arc<dyn ActivityLog>,
    ) -> Self {
        Self {
            printer,
            persistence,
            log,
        }
    }

    /// Render the invoice and record that it was printed
    pub fn print(&self, invoice: &Invoice) -> String {
        let rendered = self.printer.render(invoice);
        self.log.record(&format!("printed invoice {}", invoice.id));
        rendered
    }

    /// Save the invoice, returning where it was stored
    pub fn save(&self, invoice: &Invoice) -> Result<String> {
        let location = self.persistence.save(invoice)?;
        self.log
            .record(&format!("saved invoice {} to {location}", invoice.id));
        Ok(location)
    }
}

impl Composite for InvoiceService {
    fn blueprint() -> CompositionSpec {
        CompositionSpec::new()
            .require::<InvoicePrinterCapability>("printer")
            .require::<InvoicePersistenceCapability>("persistence")
            .require::<ActivityLogCapability>("log")
    }

    fn assemble(mut parts: Parts) -> Result<Self> {
        Ok(Self::new(
            parts.take::<InvoicePrinterCapability>("printer")?,
            parts.take::<InvoicePersistenceCapability>("persistence")?,
            parts.take::<ActivityLogCapability>("log")?,
        ))
    }
}
