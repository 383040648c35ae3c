//! Byte-level engines for nucleotide sequence processing
//!
//! Everything in here works on plain `&[u8]` slices. The domain types in
//! `crate::modules` are built on top of these primitives.

pub mod core;
pub mod compute;
pub mod storage;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error types for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
