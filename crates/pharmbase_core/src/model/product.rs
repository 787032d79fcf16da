//! Product domain model.

use crate::model::coerce;
use crate::model::pharmacy::PharmacyId;
use serde::{Deserialize, Serialize};

/// Caller-supplied identifier for a product record.
pub type ProductId = i64;

/// Product record, owned by exactly one pharmacy via `pharmacy_id`.
///
/// Nothing prevents `pharmacy_id` from pointing at a pharmacy that was
/// deleted later; presentation lookups absorb such dangling references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "coerce::lenient_i64")]
    pub id: ProductId,
    #[serde(deserialize_with = "coerce::lenient_i64")]
    pub pharmacy_id: PharmacyId,
    pub name: String,
}
