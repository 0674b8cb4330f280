//! Payment method strategies

use std::sync::Arc;

use solid_application::registry::{ImplementationConfig, STRATEGIES, StrategyEntry};
use solid_domain::error::{Error, Result};
use solid_domain::ports::{PaymentMethod, PaymentMethodCapability};
use solid_domain::{Capability, Receipt};
use tracing::info;

fn receipt(method: &str, label: &str, amount: f64) -> Receipt {
    info!(method, amount, "Payment executed");
    Receipt {
        method: method.to_string(),
        amount,
        message: format!("{label} amount {amount}"),
    }
}

#[derive(Debug, Clone, Default)]
pub struct DebitCardPayment;

impl PaymentMethod for DebitCardPayment {
    fn method_name(&self) -> &str {
        "debit_card"
    }

    fn execute(&self, amount: f64) -> Result<Receipt> {
        Ok(receipt(self.method_name(), "Debit card", amount))
    }
}

/// Credit card with an optional `limit` setting
#[derive(Debug, Clone, Default)]
pub struct CreditCardPayment {
    limit: Option<f64>,
}

impl CreditCardPayment {
    pub fn with_limit(limit: f64) -> Self {
        Self { limit: Some(limit) }
    }

    pub fn from_config(config: &ImplementationConfig) -> Result<Arc<dyn PaymentMethod>> {
        let limit = config
            .setting("limit")
            .map(|raw| {
                raw.parse::<f64>().map_err(|_| {
                    Error::factory(&config.implementation, format!("invalid limit '{raw}'"))
                })
            })
            .transpose()?;
        Ok(Arc::new(Self { limit }))
    }
}

impl PaymentMethod for CreditCardPayment {
    fn method_name(&self) -> &str {
        "credit_card"
    }

    fn execute(&self, amount: f64) -> Result<Receipt> {
        if let Some(limit) = self.limit.filter(|limit| amount > *limit) {
            return Err(Error::payment(format!(
                "amount {amount} exceeds credit limit {limit}"
            )));
        }
        Ok(receipt(self.method_name(), "Credit card", amount))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplePayPayment;

impl PaymentMethod for ApplePayPayment {
    fn method_name(&self) -> &str {
        "apple_pay"
    }

    fn execute(&self, amount: f64) -> Result<Receipt> {
        Ok(receipt(self.method_name(), "Apple Pay", amount))
    }
}

fn debit_card(_: &ImplementationConfig) -> Result<Arc<dyn PaymentMethod>> {
    Ok(Arc::new(DebitCardPayment))
}

fn apple_pay(_: &ImplementationConfig) -> Result<Arc<dyn PaymentMethod>> {
    Ok(Arc::new(ApplePayPayment))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STRATEGIES)]
static DEBIT_CARD: StrategyEntry = StrategyEntry {
    capability: PaymentMethodCapability::DESCRIPTOR.name,
    name: "debit_card",
    description: "Debit card payment",
    install: |registry, options| {
        registry.register_with::<PaymentMethodCapability, _>(options, debit_card)
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static CREDIT_CARD: StrategyEntry = StrategyEntry {
    capability: PaymentMethodCapability::DESCRIPTOR.name,
    name: "credit_card",
    description: "Credit card payment with an optional `limit` setting",
    install: |registry, options| {
        registry.register_with::<PaymentMethodCapability, _>(
            options,
            CreditCardPayment::from_config,
        )
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static APPLE_PAY: StrategyEntry = StrategyEntry {
    capability: PaymentMethodCapability::DESCRIPTOR.name,
    name: "apple_pay",
    description: "Apple Pay payment",
    install: |registry, options| {
        registry.register_with::<PaymentMethodCapability, _>(options, apple_pay)
    },
};
