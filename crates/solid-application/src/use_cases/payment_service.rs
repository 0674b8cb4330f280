//! Payments through an injected payment method

use std::sync::Arc;

use solid_domain::error::{Error, Result};
use solid_domain::ports::{
    ActivityLog, ActivityLogCapability, PaymentMethod, PaymentMethodCapability,
};
use solid_domain::Receipt;

use crate::composer::{Composite, CompositionSpec, Parts};

pub struct PaymentService {
    method: Arc<dyn PaymentMethod>,
    log: Arc<dyn ActivityLog>,
}

impl PaymentService {
    pub fn new(method: Arc<dyn PaymentMethod>, log: Arc<dyn ActivityLog>) -> Self {
        Self { method, log }
    }

    pub fn method_name(&self) -> &str {
        self.method.method_name()
    }

    /// Charge `amount` through the injected method
    ///
    /// Amounts must be finite and positive.
    pub fn make_payment(&self, amount: f64) -> Result<Receipt> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::payment(format!("invalid amount {amount}")));
        }

        let receipt = self.method.execute(amount)?;
        self.log.record(&receipt.message);
        Ok(receipt)
    }
}

impl Composite for PaymentService {
    fn blueprint() -> CompositionSpec {
        CompositionSpec::new()
            .require::<PaymentMethodCapability>("method")
            .require::<ActivityLogCapability>("log")
    }

    fn assemble(mut parts: Parts) -> Result<Self> {
        Ok(Self::new(
            parts.take::<PaymentMethodCapability>("method")?,
            parts.take::<ActivityLogCapability>("log")?,
        ))
    }
}
