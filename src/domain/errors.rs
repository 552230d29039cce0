use std::path::PathBuf;
use thiserror::Error;

/// Failure categories for a bundle run. Everything funnels to the top-level
/// reporter in the CLI layer; nothing here is ever allowed to panic across.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("directory not found: {0}")]
    Traversal(PathBuf),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unexpected(String),
}
