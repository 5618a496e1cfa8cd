// src/error.rs
//! Error taxonomy for the pool builder.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    /// Network or HTTP-status failure while fetching a docs page.
    /// Fatal on the stdout/split paths; the bundle path downgrades it
    /// to an empty pool per kind.
    #[error("fetch failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Filesystem failure while writing output.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid mode combination (e.g. stdout with several kinds).
    #[error("{0}")]
    Usage(String),
}
