//! Error types for the gates crate.

use thiserror::Error;

/// Errors produced by gate construction and registry operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    /// Matrix is not a valid gate (not square, not 2^k-dimensional, or
    /// not unitary within tolerance).
    #[error("invalid gate matrix: {0}")]
    InvalidGate(String),

    /// A gate is already registered under this name.
    #[error("gate '{0}' is already registered")]
    DuplicateGate(String),

    /// No gate is registered under this name.
    #[error("no gate registered under '{0}'")]
    UnknownGate(String),
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;
