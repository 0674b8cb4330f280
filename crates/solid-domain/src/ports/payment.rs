//! Payment capability

use crate::capability::{Capability, CapabilityDescriptor};
use crate::entities::Receipt;
use crate::error::Result;

/// Executes a charge
pub trait PaymentMethod: Send + Sync {
    /// Name of the method (e.g. "credit_card")
    fn method_name(&self) -> &str;

    /// Charge the given amount
    fn execute(&self, amount: f64) -> Result<Receipt>;
}

/// Capability marker for [`PaymentMethod`]
pub struct PaymentMethodCapability;

impl Capability for PaymentMethodCapability {
    type Object = dyn PaymentMethod;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "payment_method",
        description: "Executes a charge",
        methods: &["method_name", "execute"],
    };
}
