//! Invoice printers

use std::sync::Arc;

use serde::Serialize;
use solid_application::registry::{ImplementationConfig, STRATEGIES, StrategyEntry};
use solid_domain::error::Result;
use solid_domain::ports::{InvoicePrinter, InvoicePrinterCapability};
use solid_domain::{Capability, Invoice};
use tracing::warn;

const RULE: &str = "----------------------";

/// Plain-text printer
///
/// ```text
/// ----------------------
/// Invoice id: 3f2c...
/// Total Cost $885.6
/// Discounts: 20
/// ----------------------
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlainInvoicePrinter;

impl InvoicePrinter for PlainInvoicePrinter {
    fn render(&self, invoice: &Invoice) -> String {
        [
            RULE.to_string(),
            format!("Invoice id: {}", invoice.id),
            format!("Total Cost ${}", invoice.total()),
            format!("Discounts: {}", invoice.discount_percentage),
            RULE.to_string(),
        ]
        .join("\n")
    }
}

#[derive(Serialize)]
struct InvoiceView<'a> {
    id: &'a str,
    items: usize,
    subtotal: f64,
    discount_percentage: f64,
    total: f64,
}

/// JSON printer; `pretty = "false"` switches to compact output
#[derive(Debug, Clone)]
pub struct JsonInvoicePrinter {
    pretty: bool,
}

impl JsonInvoicePrinter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn from_config(config: &ImplementationConfig) -> Result<Arc<dyn InvoicePrinter>> {
        Ok(Arc::new(Self::new(config.setting_or("pretty", "true") != "false")))
    }
}

impl InvoicePrinter for JsonInvoicePrinter {
    fn render(&self, invoice: &Invoice) -> String {
        let view = InvoiceView {
            id: &invoice.id,
            items: invoice.products.len(),
            subtotal: invoice.subtotal(),
            discount_percentage: invoice.discount_percentage,
            total: invoice.total(),
        };
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&view)
        } else {
            serde_json::to_string(&view)
        };
        rendered.unwrap_or_else(|e| render_error(&e))
    }
}

fn render_error(error: &serde_json::Error) -> String {
    warn!(error = %error, "Failed to serialize invoice");
    serde_json::json!({ "error": error.to_string() }).to_string()
}

fn plain_printer(_: &ImplementationConfig) -> Result<Arc<dyn InvoicePrinter>> {
    Ok(Arc::new(PlainInvoicePrinter))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STRATEGIES)]
static PLAIN_PRINTER: StrategyEntry = StrategyEntry {
    capability: InvoicePrinterCapability::DESCRIPTOR.name,
    name: "plain",
    description: "Plain-text invoice printer",
    install: |registry, options| {
        registry.register_with::<InvoicePrinterCapability, _>(options, plain_printer)
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static JSON_PRINTER: StrategyEntry = StrategyEntry {
    capability: InvoicePrinterCapability::DESCRIPTOR.name,
    name: "json",
    description: "JSON invoice printer",
    install: |registry, options| {
        registry.register_with::<InvoicePrinterCapability, _>(
            options,
            JsonInvoicePrinter::from_config,
        )
    },
};
