//! Core record-management logic for Pharmbase.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::pharmacy::{NewPharmacy, Pharmacy, PharmacyId};
pub use model::price_list::{PaymentMethod, PriceListEntry};
pub use model::product::{Product, ProductId};
pub use repo::record_store::{RecordStore, RepoError, RepoResult};
pub use service::dashboard::{
    Dashboard, PharmacyDetails, PharmacyForm, PriceListForm, ProductForm, WorkflowError,
};
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
