//! Validated unitary matrices.

use ndarray::Array2;
use num_complex::Complex64;

use crate::approx::approx_eq;
use crate::error::{GateError, GateResult};

/// An immutable unitary matrix of dimension 2^k × 2^k.
///
/// Construction validates shape and unitarity; once built, the matrix
/// cannot be modified, so every `GateMatrix` in circulation satisfies
/// `U·U† = I` within [`EPSILON`](crate::approx::EPSILON).
#[derive(Debug, Clone, PartialEq)]
pub struct GateMatrix {
    data: Array2<Complex64>,
    num_qubits: u32,
}

impl GateMatrix {
    /// Validate `data` as a unitary gate matrix.
    ///
    /// Fails with [`GateError::InvalidGate`] if the matrix is not square,
    /// its dimension is not a power of two ≥ 2, or `U·U†` deviates from
    /// the identity by more than [`EPSILON`](crate::approx::EPSILON) in
    /// any entry.
    pub fn unitary(data: Array2<Complex64>) -> GateResult<Self> {
        let (rows, cols) = data.dim();
        if rows != cols {
            return Err(GateError::InvalidGate(format!(
                "matrix is {rows}×{cols}, expected square"
            )));
        }
        if rows < 2 || !rows.is_power_of_two() {
            return Err(GateError::InvalidGate(format!(
                "dimension {rows} is not 2^k for k ≥ 1"
            )));
        }

        let product = data.dot(&adjoint_of(&data));
        let identity = Array2::<Complex64>::eye(rows);
        for ((r, c), entry) in product.indexed_iter() {
            if !approx_eq(*entry, identity[[r, c]]) {
                return Err(GateError::InvalidGate(format!(
                    "U·U† deviates from identity at ({r}, {c}): {entry}"
                )));
            }
        }

        let num_qubits = rows.trailing_zeros();
        Ok(Self { data, num_qubits })
    }

    /// Number of qubits this matrix acts on (the `k` in 2^k).
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Matrix dimension, 2^k.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    /// The underlying matrix.
    #[inline]
    pub fn as_array(&self) -> &Array2<Complex64> {
        &self.data
    }

    /// Conjugate transpose.
    ///
    /// For a unitary matrix this is its exact inverse, so the result is
    /// again a valid `GateMatrix` and no re-validation is needed.
    pub fn adjoint(&self) -> Self {
        Self {
            data: adjoint_of(&self.data),
            num_qubits: self.num_qubits,
        }
    }
}

fn adjoint_of(m: &Array2<Complex64>) -> Array2<Complex64> {
    m.t().mapv(|z| z.conj())
}
