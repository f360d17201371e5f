//! Error types for cycle discovery.

/// Errors produced by the discovery engine.
///
/// Every variant is terminal for a scan: the engine cannot make progress
/// without its buffers, and every operation is deterministic, so retrying
/// would reproduce the same failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A membership set could not be allocated.
    #[error("couldn't allocate {bytes} bytes for state array")]
    Allocation { bytes: usize },

    /// The engine configuration cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Writing a report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for cycle discovery operations.
pub type Result<T> = std::result::Result<T, Error>;
