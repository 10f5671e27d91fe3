//! Crate error type.

use thiserror::Error;

/// Which catalog collection an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Product,
    Shelf,
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefKind::Product => f.write_str("product"),
            RefKind::Shelf => f.write_str("shelf"),
        }
    }
}

/// Errors raised before or around an optimization run.
///
/// The evolutionary loop itself never fails; everything here is detected
/// while validating inputs or reading and writing files.
#[derive(Debug, Error)]
pub enum AllocError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unknown {kind} reference: {id}")]
    UnknownReference { kind: RefKind, id: String },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: RefKind, id: String },

    #[error("product {0} has no shelf in the assignment")]
    Unassigned(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AllocError>;
