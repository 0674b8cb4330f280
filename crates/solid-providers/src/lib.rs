//! # SOLID capability playground - Strategy Implementations
//!
//! Every strategy implements exactly one capability trait from
//! `solid-domain` (the gesture buttons implement the gestures they support)
//! and registers itself in the link-time catalogue.
//!
//! | Capability | Trait | Strategies |
//! |------------|-------|------------|
//! | `door` | `Door` | wooden, iron |
//! | `bowl` | `Bowl` | fruit, meat |
//! | `invoice_printer` | `InvoicePrinter` | plain, json |
//! | `invoice_persistence` | `InvoicePersistence` | memory, database |
//! | `payment_method` | `PaymentMethod` | debit_card, credit_card, apple_pay |
//! | `tap` / `double_tap` / `long_press` | gesture traits | super_button, double_tap_button |
//! | `activity_log` | `ActivityLog` | tracing, memory |
//! | `remote_api` | `RemoteApi` | mock, static |
//!
//! ## Usage
//!
//! ```ignore
//! // Force linkme registration
//! extern crate solid_providers;
//!
//! let registry = Registry::default();
//! solid_application::registry::install_all_strategies(&registry)?;
//! ```

pub use solid_domain::error::{Error, Result};

pub mod activity_log;
pub mod gesture;
pub mod invoice;
pub mod payment;
pub mod remote_api;
pub mod zoo;

pub use activity_log::{MemoryActivityLog, TracingActivityLog};
pub use gesture::{DoubleTapButton, SuperButton};
pub use invoice::{
    DatabaseInvoicePersistence, JsonInvoicePrinter, MemoryInvoicePersistence, PlainInvoicePrinter,
};
pub use payment::{ApplePayPayment, CreditCardPayment, DebitCardPayment};
pub use remote_api::{MockRemoteApi, StaticRemoteApi};
pub use zoo::{FruitBowl, IronDoor, MeatBowl, WoodenDoor};
