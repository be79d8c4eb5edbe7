//! Gate definitions.
//!
//! A [`GateDefinition`] is the single source of truth for a gate's
//! action: its arity and its validated unitary matrix. Multi-qubit
//! controlled forms are never stored alongside it — they are derived by
//! the composer in `alsvin-state`, so the base matrix and its expansions
//! cannot diverge.

use ndarray::{Array2, array};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::GateResult;
use crate::matrix::GateMatrix;

/// Standard gates with known semantics.
///
/// Parametrized variants carry their numeric parameter; the matrix is
/// computed from it when [`definition`](StandardGate::definition) is
/// called. Controlled forms (CX, CCX, …) are deliberately absent: a
/// controlled gate is a composition, not a separate matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X (NOT) gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// sqrt(X)-dagger gate.
    SXdg,
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Phase gate.
    P(f64),
    /// Universal single-qubit gate U(θ, φ, λ).
    U(f64, f64, f64),
    /// SWAP gate.
    Swap,
    /// iSWAP gate.
    ISwap,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::SX => "sx",
            StandardGate::SXdg => "sxdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::P(_) => "p",
            StandardGate::U(_, _, _) => "u",
            StandardGate::Swap => "swap",
            StandardGate::ISwap => "iswap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::Swap | StandardGate::ISwap => 2,
            _ => 1,
        }
    }

    /// Check if this gate carries a numeric parameter.
    pub fn is_parameterized(&self) -> bool {
        matches!(
            self,
            StandardGate::Rx(_)
                | StandardGate::Ry(_)
                | StandardGate::Rz(_)
                | StandardGate::P(_)
                | StandardGate::U(_, _, _)
        )
    }

    /// Build the validated definition for this gate.
    ///
    /// All standard matrices are unitary by construction, but they still
    /// pass through the validating constructor: a non-unitary result here
    /// is a bug and surfaces immediately as [`GateError::InvalidGate`].
    ///
    /// [`GateError::InvalidGate`]: crate::GateError::InvalidGate
    pub fn definition(&self) -> GateResult<GateDefinition> {
        GateDefinition::new(self.matrix())
    }

    /// The raw matrix for this gate, row-major over the computational
    /// basis.
    fn matrix(&self) -> Array2<Complex64> {
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        match *self {
            StandardGate::I => array![
                [c(1.0, 0.0), c(0.0, 0.0)],
                [c(0.0, 0.0), c(1.0, 0.0)],
            ],
            StandardGate::X => array![
                [c(0.0, 0.0), c(1.0, 0.0)],
                [c(1.0, 0.0), c(0.0, 0.0)],
            ],
            StandardGate::Y => array![
                [c(0.0, 0.0), c(0.0, -1.0)],
                [c(0.0, 1.0), c(0.0, 0.0)],
            ],
            StandardGate::Z => array![
                [c(1.0, 0.0), c(0.0, 0.0)],
                [c(0.0, 0.0), c(-1.0, 0.0)],
            ],
            StandardGate::H => array![
                [c(sqrt2_inv, 0.0), c(sqrt2_inv, 0.0)],
                [c(sqrt2_inv, 0.0), c(-sqrt2_inv, 0.0)],
            ],
            StandardGate::S => phase_matrix(FRAC_PI_2),
            StandardGate::Sdg => phase_matrix(-FRAC_PI_2),
            StandardGate::T => phase_matrix(FRAC_PI_4),
            StandardGate::Tdg => phase_matrix(-FRAC_PI_4),
            StandardGate::SX => array![
                [c(0.5, 0.5), c(0.5, -0.5)],
                [c(0.5, -0.5), c(0.5, 0.5)],
            ],
            StandardGate::SXdg => array![
                [c(0.5, -0.5), c(0.5, 0.5)],
                [c(0.5, 0.5), c(0.5, -0.5)],
            ],
            StandardGate::Rx(theta) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                array![
                    [c(cos, 0.0), c(0.0, -sin)],
                    [c(0.0, -sin), c(cos, 0.0)],
                ]
            }
            StandardGate::Ry(theta) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                array![
                    [c(cos, 0.0), c(-sin, 0.0)],
                    [c(sin, 0.0), c(cos, 0.0)],
                ]
            }
            StandardGate::Rz(theta) => array![
                [Complex64::from_polar(1.0, -theta / 2.0), c(0.0, 0.0)],
                [c(0.0, 0.0), Complex64::from_polar(1.0, theta / 2.0)],
            ],
            StandardGate::P(phi) => phase_matrix(phi),
            StandardGate::U(theta, phi, lambda) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                array![
                    [
                        c(cos, 0.0),
                        -Complex64::from_polar(sin, lambda),
                    ],
                    [
                        Complex64::from_polar(sin, phi),
                        Complex64::from_polar(cos, phi + lambda),
                    ],
                ]
            }
            StandardGate::Swap => array![
                [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
                [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
                [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
                [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
            ],
            StandardGate::ISwap => array![
                [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
                [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
                [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
                [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
            ],
        }
    }
}

#[inline]
fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// diag(1, e^{iφ})
fn phase_matrix(phi: f64) -> Array2<Complex64> {
    array![
        [c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), Complex64::from_polar(1.0, phi)],
    ]
}

/// An immutable gate: arity plus validated unitary matrix.
///
/// This is the capability every gate kind reduces to. The composer and
/// the state engine depend only on this type, never on concrete gate
/// identity.
#[derive(Debug, Clone, PartialEq)]
pub struct GateDefinition {
    matrix: GateMatrix,
}

impl GateDefinition {
    /// Validate a raw matrix into a gate definition.
    ///
    /// Fails with [`GateError::InvalidGate`] if the matrix is not square,
    /// not 2^k-dimensional, or not unitary within tolerance.
    ///
    /// [`GateError::InvalidGate`]: crate::GateError::InvalidGate
    pub fn new(matrix: Array2<Complex64>) -> GateResult<Self> {
        Ok(Self {
            matrix: GateMatrix::unitary(matrix)?,
        })
    }

    /// Wrap an already-validated matrix.
    pub fn from_matrix(matrix: GateMatrix) -> Self {
        Self { matrix }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn arity(&self) -> u32 {
        self.matrix.num_qubits()
    }

    /// Matrix dimension, 2^arity.
    #[inline]
    pub fn dim(&self) -> usize {
        self.matrix.dim()
    }

    /// The gate's unitary matrix.
    #[inline]
    pub fn matrix(&self) -> &Array2<Complex64> {
        self.matrix.as_array()
    }

    /// The inverse gate (conjugate transpose of the matrix).
    pub fn adjoint(&self) -> Self {
        Self {
            matrix: self.matrix.adjoint(),
        }
    }
}
