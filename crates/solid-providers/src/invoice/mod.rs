//! Invoice printers and persistence backends

pub mod persistence;
pub mod printer;

pub use persistence::{DatabaseInvoicePersistence, MemoryInvoicePersistence};
pub use printer::{JsonInvoicePrinter, PlainInvoicePrinter};
