//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the external key-value collaborator contract.
//! - Provide in-memory and file-backed implementations.
//!
//! # Invariants
//! - The collaborator stores opaque string payloads; record typing and
//!   recovery from malformed payloads live in the repository layer.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod kv;

pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while talking to the backing key-value store.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "store i/o failure at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}
