//! Repository layer owning the record collections.
//!
//! # Responsibility
//! - Hold the three in-memory collections and their identity rules.
//! - Synchronize every mutation to the key-value backing store.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`DuplicateEntry`, `NotFound`
//!   variants); persistence failures are logged, never propagated.

pub mod record_store;
