//! Error types for the state crate.

use alsvin_gates::GateError;
use thiserror::Error;

/// Errors produced by operator composition and state evolution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StateError {
    /// A target or control index is outside the register.
    #[error("qubit {qubit} is out of range for a {num_qubits}-qubit register")]
    InvalidTarget {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the register.
        num_qubits: u32,
    },

    /// A qubit appears twice across the target and control lists.
    #[error("qubit {qubit} appears more than once across targets and controls")]
    DuplicateQubit {
        /// The duplicate qubit index.
        qubit: u32,
    },

    /// The target list does not match the gate's arity.
    #[error("gate acts on {expected} qubits, got {got} targets")]
    ArityMismatch {
        /// The gate's arity.
        expected: u32,
        /// Number of targets supplied.
        got: u32,
    },

    /// Operator and state vector are sized for different registers.
    #[error("operator is for {operator} qubits but state has {state}")]
    WidthMismatch {
        /// Operator width in qubits.
        operator: u32,
        /// State width in qubits.
        state: u32,
    },

    /// A caller-supplied amplitude vector is not normalized (or its
    /// length is not a power of two ≥ 2).
    #[error("state vector is not normalized: |ψ|² = {norm_sqr}")]
    Normalization {
        /// The squared norm that was observed.
        norm_sqr: f64,
    },

    /// The norm drifted outside tolerance after an application.
    ///
    /// Signals a malformed operator or accumulated numerical corruption.
    /// Fatal for the state vector it was raised on: the caller must
    /// discard the vector, not retry.
    #[error("norm drifted after apply: |ψ|² = {norm_sqr}")]
    UnitarityDrift {
        /// The squared norm after application.
        norm_sqr: f64,
    },

    /// Gate construction or lookup error.
    #[error("gate error: {0}")]
    Gate(#[from] GateError),
}

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;
