//! Full-register operator composition.
//!
//! Expands a k-qubit [`GateDefinition`] into the 2^N × 2^N operator that
//! applies it to chosen target qubits of an N-qubit register, leaving
//! every other qubit untouched and honouring optional control qubits.
//!
//! The construction is bit-indexed: for each basis row the target bits
//! are gathered into a gate-matrix row index and the gate's columns are
//! scattered back into full-register column indices. Identity factors
//! for untouched qubits are never materialized, so the cost is
//! O(2^N · 2^k) rather than a chain of Kronecker products.
//!
//! Dense 2^N × 2^N storage is the accepted scaling limit of this design:
//! it matches the state vector's own exponential size. Sparse and
//! tensor-network representations are out of scope.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::{debug, instrument};

use alsvin_gates::GateDefinition;
use alsvin_gates::approx::approx_eq;

use crate::error::{StateError, StateResult};

/// A 2^N × 2^N operator acting on a full N-qubit register.
///
/// Transient: built per application by [`compose`], consumed by
/// [`StateVector::apply`](crate::StateVector::apply), not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedOperator {
    matrix: Array2<Complex64>,
    num_qubits: u32,
}

impl ComposedOperator {
    /// Width of the register this operator acts on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Matrix dimension, 2^N.
    #[inline]
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// The operator matrix.
    #[inline]
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Conjugate transpose — the inverse, since composed operators are
    /// unitary whenever their gate definition is.
    pub fn adjoint(&self) -> Self {
        Self {
            matrix: self.matrix.t().mapv(|z| z.conj()),
            num_qubits: self.num_qubits,
        }
    }

    /// Check `U·U† ≈ I` within [`EPSILON`](alsvin_gates::approx::EPSILON).
    pub fn is_unitary(&self) -> bool {
        let product = self.matrix.dot(&self.adjoint().matrix);
        let identity = Array2::<Complex64>::eye(self.dim());
        product
            .indexed_iter()
            .all(|((r, c), entry)| approx_eq(*entry, identity[[r, c]]))
    }
}

/// Expand `def` onto `targets` (with optional `controls`) in an
/// N-qubit register.
///
/// On basis states where every control bit is 1 the gate acts on the
/// target bits; on all other basis states the operator is the identity.
/// Non-target, non-control qubits are untouched either way.
///
/// `targets[0]` corresponds to the most significant bit of the gate's
/// matrix index, so a 2-qubit gate defined over basis |ab⟩ receives
/// `a` from `targets[0]` and `b` from `targets[1]`.
///
/// Errors with [`StateError::InvalidTarget`] on an out-of-range index,
/// [`StateError::DuplicateQubit`] on a collision (including a qubit used
/// as both target and control), and [`StateError::ArityMismatch`] when
/// the target count does not equal the gate's arity.
#[instrument(skip(def), level = "debug")]
pub fn compose(
    def: &GateDefinition,
    targets: &[u32],
    controls: &[u32],
    num_qubits: u32,
) -> StateResult<ComposedOperator> {
    if targets.len() as u32 != def.arity() {
        return Err(StateError::ArityMismatch {
            expected: def.arity(),
            got: targets.len() as u32,
        });
    }

    let mut seen: usize = 0;
    for &qubit in targets.iter().chain(controls) {
        if qubit >= num_qubits {
            return Err(StateError::InvalidTarget { qubit, num_qubits });
        }
        let mask = 1usize << qubit;
        if seen & mask != 0 {
            return Err(StateError::DuplicateQubit { qubit });
        }
        seen |= mask;
    }

    let dim = 1usize << num_qubits;
    let gate_dim = def.dim();
    let ctrl_mask: usize = controls.iter().fold(0, |acc, &q| acc | 1usize << q);
    let tgt_mask: usize = targets.iter().fold(0, |acc, &q| acc | 1usize << q);
    let gate = def.matrix();

    let mut matrix = Array2::<Complex64>::zeros((dim, dim));
    for row in 0..dim {
        if row & ctrl_mask != ctrl_mask {
            // Some control bit is 0: identity on this basis state.
            matrix[[row, row]] = Complex64::new(1.0, 0.0);
            continue;
        }
        let gate_row = gather_target_bits(row, targets);
        let rest = row & !tgt_mask;
        for gate_col in 0..gate_dim {
            let col = rest | scatter_target_bits(gate_col, targets);
            matrix[[row, col]] = gate[[gate_row, gate_col]];
        }
    }

    debug!(
        num_qubits,
        arity = def.arity(),
        n_controls = controls.len(),
        dim,
        "composed operator"
    );

    Ok(ComposedOperator { matrix, num_qubits })
}

/// Collect the target bits of a basis index into a gate-matrix index,
/// `targets[0]` landing in the most significant position.
#[inline]
fn gather_target_bits(basis: usize, targets: &[u32]) -> usize {
    let k = targets.len();
    targets
        .iter()
        .enumerate()
        .fold(0, |acc, (j, &q)| acc | ((basis >> q) & 1) << (k - 1 - j))
}

/// Spread a gate-matrix index back onto the target bit positions.
#[inline]
fn scatter_target_bits(gate_index: usize, targets: &[u32]) -> usize {
    let k = targets.len();
    targets
        .iter()
        .enumerate()
        .fold(0, |acc, (j, &q)| acc | ((gate_index >> (k - 1 - j)) & 1) << q)
}
