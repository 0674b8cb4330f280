//! Plain data handled by the strategies

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product line on an invoice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unit price
    pub price: f64,
}

impl Product {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

/// An invoice with an optional percentage discount
///
/// Holds data only. Rendering and saving live in the `InvoicePrinter`
/// and `InvoicePersistence` capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice identifier
    pub id: String,
    /// Products billed
    pub products: Vec<Product>,
    /// Discount in percent (0-100)
    pub discount_percentage: f64,
}

impl Invoice {
    /// Create an invoice with a fresh identifier
    pub fn new(products: Vec<Product>, discount_percentage: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            products,
            discount_percentage,
        }
    }

    /// Sum of all product prices
    pub fn subtotal(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    pub fn discount_amount(&self) -> f64 {
        self.subtotal() * (self.discount_percentage / 100.0)
    }

    /// Subtotal minus discount
    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount_amount()
    }
}

/// Outcome of a successful payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Payment method that executed the charge
    pub method: String,
    /// Amount charged
    pub amount: f64,
    /// Human-readable confirmation line
    pub message: String,
}
