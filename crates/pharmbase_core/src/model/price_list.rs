//! Price-list domain model.
//!
//! # Responsibility
//! - Define the price-list entry keyed by `(pharmacy_id, product_id)`.
//!
//! # Invariants
//! - The composite key is unique across the collection at all times; the
//!   record store rejects inserts that would violate this.

use crate::model::coerce;
use crate::model::pharmacy::PharmacyId;
use crate::model::product::ProductId;
use serde::{Deserialize, Serialize};

/// How a price-list position is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Cashless,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Cash
    }
}

/// One priced position of a product at a pharmacy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListEntry {
    #[serde(deserialize_with = "coerce::lenient_i64")]
    pub pharmacy_id: PharmacyId,
    #[serde(deserialize_with = "coerce::lenient_i64")]
    pub product_id: ProductId,
    /// Positive; the workflow layer rejects zero and negative values.
    #[serde(deserialize_with = "coerce::lenient_f64")]
    pub cost: f64,
    pub payment_method: PaymentMethod,
}

impl PriceListEntry {
    /// Composite primary key of this entry.
    pub fn key(&self) -> (PharmacyId, ProductId) {
        (self.pharmacy_id, self.product_id)
    }
}
