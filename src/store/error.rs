// src/store/error.rs
use std::io;

/// Failure of a persistent key-value backend.
#[derive(Debug)]
pub enum StorageError {
    /// Storage is disabled or inaccessible in this context.
    Unavailable(String),
    Io(io::Error),
    /// The backing document exists but cannot be parsed.
    Corrupt(String),
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            Self::Io(err) => write!(f, "Storage IO error: {}", err),
            Self::Corrupt(msg) => write!(f, "Storage corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
