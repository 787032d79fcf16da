//! Workflow orchestration services.
//!
//! # Responsibility
//! - Run ordered validation gates over string-typed form input.
//! - Orchestrate record-store mutations and keep presentation state
//!   consistent with persisted collections.

pub mod dashboard;
pub mod validation;
