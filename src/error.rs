//! Error types for the reducer core
//!
//! The taxonomy is small and purely contract-based: reducers perform no I/O,
//! so every failure is a caller contract violation surfaced immediately.

use thiserror::Error;

/// Main error type for reducer construction and finalization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// Moving-average window size must be at least one slot; never clamped
    #[error("Invalid window size {size}: moving average requires at least one slot")]
    InvalidWindow {
        /// The rejected window size
        size: usize,
    },

    /// A scalar reducer was finalized without consuming any samples
    ///
    /// Returned instead of propagating a raw floating-point NaN from the
    /// zero-count division.
    #[error("Empty reduction: no samples were ingested before finalization")]
    EmptyReduce,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReduceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReduceError::InvalidWindow { size: 0 };
        assert!(err.to_string().contains("window size 0"));

        let err = ReduceError::EmptyReduce;
        assert!(err.to_string().contains("no samples"));
    }
}
