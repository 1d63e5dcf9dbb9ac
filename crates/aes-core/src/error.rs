//! Errors raised when converting untyped input into keys, blocks or stages.

use thiserror::Error;

/// Boundary errors for the AES-128 engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A key or block slice was not exactly the required length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// A pipeline stage index was past the final stage.
    #[error("AES-128 has no stage {index}")]
    InvalidStage {
        /// Index that was supplied.
        index: usize,
    },
}
