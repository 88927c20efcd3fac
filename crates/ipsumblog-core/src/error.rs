//! Error types for entry synthesis and persistence.

use std::path::PathBuf;

/// Errors raised while synthesizing or persisting entries.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("digest must be 40 lowercase hex characters, got {0:?}")]
    InvalidDigest(String),

    #[error("seed window length must be in 1..=7, got {0}")]
    InvalidSeedWindow(usize),

    #[error("seed window at offset {offset} with length {len} exceeds digest of length {available}")]
    SeedWindowOutOfRange {
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("invalid paragraph bounds: {0}")]
    InvalidBounds(String),

    #[error("file {} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Whether this is a persistence failure rather than a synthesis precondition.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. } | Self::Io { .. })
    }
}
