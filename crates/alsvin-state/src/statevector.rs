//! Statevector engine.
//!
//! Holds the 2^N complex amplitudes of an N-qubit register and evolves
//! them through composed operators and measurements. One `StateVector`
//! is owned by one logical thread of control; all mutation goes through
//! `&mut self`, and measurement randomness is injected by the caller so
//! runs are reproducible.

use ndarray::aview1;
use num_complex::Complex64;
use rand::Rng;
use tracing::{debug, instrument};

use alsvin_gates::GateDefinition;
use alsvin_gates::approx::{DRIFT_EPSILON, EPSILON, approx_one};

use crate::error::{StateError, StateResult};
use crate::operator::{ComposedOperator, compose};

/// The amplitude vector of an N-qubit register.
///
/// Basis states are indexed by N-bit integers with qubit `i` at bit `i`.
/// The sum of squared magnitudes is 1 at every point a caller can
/// observe; an application that breaks that invariant beyond tolerance
/// fails with [`StateError::UnitarityDrift`] and poisons the vector.
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    num_qubits: u32,
}

impl StateVector {
    /// Create a register initialized to |0…0⟩.
    pub fn zero(num_qubits: u32) -> Self {
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Create a register from a caller-supplied amplitude vector.
    ///
    /// The length must be a power of two ≥ 2 and the squared-magnitude
    /// sum must be within tolerance of 1, else
    /// [`StateError::Normalization`]. Non-finite amplitudes fail the
    /// same check (a NaN norm is never within tolerance).
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> StateResult<Self> {
        let len = amplitudes.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(StateError::Normalization { norm_sqr: 0.0 });
        }
        let norm_sqr: f64 = amplitudes.iter().map(|a| a.norm_sqr()).sum();
        if !approx_one(norm_sqr, EPSILON) {
            return Err(StateError::Normalization { norm_sqr });
        }
        Ok(Self {
            amplitudes,
            num_qubits: len.trailing_zeros(),
        })
    }

    /// Number of qubits in the register.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Dimension of the state space, 2^N.
    #[inline]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the amplitudes.
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probability of observing basis state `index`: |α|².
    #[inline]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Sum of squared magnitudes (≈ 1 for a healthy vector).
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Left-multiply the amplitudes by a composed operator.
    ///
    /// Fails with [`StateError::WidthMismatch`] if the operator was
    /// composed for a different register width, and with
    /// [`StateError::UnitarityDrift`] if the norm leaves tolerance
    /// afterwards. Drift is fatal: the vector must be discarded, since
    /// continuing would compound the corruption.
    pub fn apply(&mut self, op: &ComposedOperator) -> StateResult<()> {
        if op.num_qubits() != self.num_qubits {
            return Err(StateError::WidthMismatch {
                operator: op.num_qubits(),
                state: self.num_qubits,
            });
        }

        let next = op.matrix().dot(&aview1(&self.amplitudes));
        let norm_sqr: f64 = next.iter().map(|a| a.norm_sqr()).sum();
        if !approx_one(norm_sqr, DRIFT_EPSILON) {
            return Err(StateError::UnitarityDrift { norm_sqr });
        }

        self.amplitudes = next.to_vec();
        Ok(())
    }

    /// Compose `def` onto `targets` and apply it in one step.
    pub fn apply_gate(&mut self, def: &GateDefinition, targets: &[u32]) -> StateResult<()> {
        let op = compose(def, targets, &[], self.num_qubits)?;
        self.apply(&op)
    }

    /// Compose `def` onto `targets` under `controls` and apply it.
    pub fn apply_controlled(
        &mut self,
        def: &GateDefinition,
        targets: &[u32],
        controls: &[u32],
    ) -> StateResult<()> {
        let op = compose(def, targets, controls, self.num_qubits)?;
        self.apply(&op)
    }

    /// Measure the listed qubits, collapsing the state.
    ///
    /// Samples an outcome with probability equal to the summed |α|² over
    /// all basis states consistent with the observed bits, zeroes the
    /// inconsistent amplitudes, renormalizes the remainder, and returns
    /// the observed bits aligned index-for-index with `qubits`.
    ///
    /// Randomness comes only from the injected `rng`; a seeded generator
    /// makes the whole simulation reproducible. The vector stays usable
    /// afterwards — further applications are legal.
    #[instrument(skip(self, rng), level = "debug")]
    pub fn measure<R: Rng>(&mut self, qubits: &[u32], rng: &mut R) -> StateResult<Vec<u8>> {
        let mut seen: usize = 0;
        for &qubit in qubits {
            if qubit >= self.num_qubits {
                return Err(StateError::InvalidTarget {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            let mask = 1usize << qubit;
            if seen & mask != 0 {
                return Err(StateError::DuplicateQubit { qubit });
            }
            seen |= mask;
        }

        let outcome = self.sample(rng);
        let mask: usize = qubits.iter().fold(0, |acc, &q| acc | 1usize << q);
        let pattern = outcome & mask;

        // Collapse to the consistent subspace and renormalize.
        let mut norm_sqr = 0.0;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == pattern {
                norm_sqr += amp.norm_sqr();
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }
        let norm = norm_sqr.sqrt();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }

        let bits: Vec<u8> = qubits.iter().map(|&q| ((outcome >> q) & 1) as u8).collect();
        debug!(?bits, subspace_weight = norm_sqr, "measured");
        Ok(bits)
    }

    /// Sample a full-register basis outcome without collapsing.
    ///
    /// Outcome `i` is drawn with probability |α_i|².
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        // Cumulative sums can fall fractionally short of 1.
        self.amplitudes.len() - 1
    }

    /// Format a basis outcome as a bitstring, qubit 0 first.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        (0..self.num_qubits)
            .map(|q| if outcome >> q & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}
