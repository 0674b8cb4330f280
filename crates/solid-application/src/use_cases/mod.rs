//! Use cases - composites built by the [`Composer`](crate::Composer)
//!
//! Each composite holds one instance per role and never names a concrete
//! strategy type.

pub mod button_panel;
pub mod cage;
pub mod invoice_service;
pub mod payment_service;

pub use button_panel::ButtonPanel;
pub use cage::Cage;
pub use invoice_service::InvoiceService;
pub use payment_service::PaymentService;
