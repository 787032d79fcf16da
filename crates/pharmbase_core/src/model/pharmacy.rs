//! Pharmacy domain model.
//!
//! # Responsibility
//! - Define the pharmacy record owned by the record store.
//!
//! # Invariants
//! - `id` is system-assigned and never changes once the record exists.
//! - `name` and `director_full_name` contain letters and spaces only; the
//!   workflow layer enforces this before any record is constructed.

use crate::model::coerce;
use serde::{Deserialize, Serialize};

/// Stable identifier for a pharmacy record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PharmacyId = i64;

/// Pharmacy record as held in memory and persisted to the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pharmacy {
    #[serde(deserialize_with = "coerce::lenient_i64")]
    pub id: PharmacyId,
    pub name: String,
    /// Phone number in the regional `+7`/`8` format.
    pub contact_info: String,
    /// Free text; empty means not provided.
    pub address: String,
    pub director_full_name: String,
}

/// Pharmacy fields without an identity, used for inserts.
///
/// The record store assigns the id at insert time, so callers can never
/// smuggle one in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPharmacy {
    pub name: String,
    pub contact_info: String,
    pub address: String,
    pub director_full_name: String,
}

impl NewPharmacy {
    /// Completes the record with a store-assigned id.
    pub fn assign_id(self, id: PharmacyId) -> Pharmacy {
        Pharmacy {
            id,
            name: self.name,
            contact_info: self.contact_info,
            address: self.address,
            director_full_name: self.director_full_name,
        }
    }
}
