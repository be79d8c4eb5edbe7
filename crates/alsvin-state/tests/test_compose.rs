//! Tests for operator composition against full registers.

use ndarray::Array2;
use num_complex::Complex64;

use alsvin_gates::approx::{EPSILON, approx_eq};
use alsvin_gates::{GateDefinition, GateRegistry, StandardGate};
use alsvin_state::{StateError, StateVector, compose};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn assert_amplitudes(sv: &StateVector, expected: &[Complex64]) {
    assert_eq!(sv.dim(), expected.len());
    for (i, (got, want)) in sv.amplitudes().iter().zip(expected).enumerate() {
        assert!(approx_eq(*got, *want), "index {i}: {got} != {want}");
    }
}

// ---------------------------------------------------------------------------
// Targeted expansion
// ---------------------------------------------------------------------------

#[test]
fn not_on_qubit_0_of_two_qubit_register() {
    let x = StandardGate::X.definition().unwrap();
    let op = compose(&x, &[0], &[], 2).unwrap();

    let mut sv = StateVector::zero(2);
    sv.apply(&op).unwrap();

    // |00⟩ → |01⟩: amplitude 1 at basis index binary 01.
    assert_amplitudes(
        &sv,
        &[c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
    );
}

#[test]
fn not_flips_each_qubit_of_all_zero_state() {
    let x = StandardGate::X.definition().unwrap();
    for qubit in 0..4 {
        let mut sv = StateVector::zero(4);
        sv.apply_gate(&x, &[qubit]).unwrap();
        assert!((sv.probability(1 << qubit) - 1.0).abs() < EPSILON);
    }
}

#[test]
fn untouched_qubits_keep_their_amplitudes() {
    let h = StandardGate::H.definition().unwrap();
    let x = StandardGate::X.definition().unwrap();

    // Put qubit 1 into |1⟩, then act on qubit 0 only.
    let mut sv = StateVector::zero(2);
    sv.apply_gate(&x, &[1]).unwrap();
    sv.apply_gate(&h, &[0]).unwrap();

    let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
    assert_amplitudes(
        &sv,
        &[
            c(0.0, 0.0),
            c(0.0, 0.0),
            c(sqrt2_inv, 0.0),
            c(sqrt2_inv, 0.0),
        ],
    );
}

#[test]
fn swap_exchanges_distant_qubits() {
    let swap = StandardGate::Swap.definition().unwrap();
    let x = StandardGate::X.definition().unwrap();

    let mut sv = StateVector::zero(3);
    sv.apply_gate(&x, &[0]).unwrap();
    sv.apply_gate(&swap, &[0, 2]).unwrap();

    assert!((sv.probability(0b100) - 1.0).abs() < EPSILON);
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

#[test]
fn control_bit_zero_leaves_target_unchanged() {
    let x = StandardGate::X.definition().unwrap();
    let op = compose(&x, &[1], &[0], 2).unwrap();

    // Control qubit 0 is 0: identity branch.
    let mut sv = StateVector::zero(2);
    sv.apply(&op).unwrap();
    assert!((sv.probability(0b00) - 1.0).abs() < EPSILON);
}

#[test]
fn control_bit_one_applies_gate() {
    let x = StandardGate::X.definition().unwrap();

    let mut sv = StateVector::zero(2);
    sv.apply_gate(&x, &[0]).unwrap();
    sv.apply_controlled(&x, &[1], &[0]).unwrap();

    // Both qubits set now.
    assert!((sv.probability(0b11) - 1.0).abs() < EPSILON);
}

#[test]
fn toffoli_needs_both_controls() {
    let x = StandardGate::X.definition().unwrap();

    // Only one control set: target stays 0.
    let mut sv = StateVector::zero(3);
    sv.apply_gate(&x, &[0]).unwrap();
    sv.apply_controlled(&x, &[2], &[0, 1]).unwrap();
    assert!((sv.probability(0b001) - 1.0).abs() < EPSILON);

    // Both controls set: target flips.
    sv.apply_gate(&x, &[1]).unwrap();
    sv.apply_controlled(&x, &[2], &[0, 1]).unwrap();
    assert!((sv.probability(0b111) - 1.0).abs() < EPSILON);
}

#[test]
fn controlled_superposed_control_entangles() {
    let h = StandardGate::H.definition().unwrap();
    let x = StandardGate::X.definition().unwrap();

    let mut sv = StateVector::zero(2);
    sv.apply_gate(&h, &[0]).unwrap();
    sv.apply_controlled(&x, &[1], &[0]).unwrap();

    let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
    assert_amplitudes(
        &sv,
        &[
            c(sqrt2_inv, 0.0),
            c(0.0, 0.0),
            c(0.0, 0.0),
            c(sqrt2_inv, 0.0),
        ],
    );
}

#[test]
fn ghz_state_through_compose_path() {
    let h = StandardGate::H.definition().unwrap();
    let x = StandardGate::X.definition().unwrap();

    let mut sv = StateVector::zero(3);
    sv.apply_gate(&h, &[0]).unwrap();
    sv.apply_controlled(&x, &[1], &[0]).unwrap();
    sv.apply_controlled(&x, &[2], &[1]).unwrap();

    let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
    assert!((sv.probability(0b000) - sqrt2_inv * sqrt2_inv).abs() < EPSILON);
    assert!((sv.probability(0b111) - sqrt2_inv * sqrt2_inv).abs() < EPSILON);
    for i in 1..7 {
        assert!(sv.probability(i) < EPSILON);
    }
}

// ---------------------------------------------------------------------------
// Target ordering
// ---------------------------------------------------------------------------

/// A 2-qubit gate whose action distinguishes its two operands: flips the
/// low operand only when the high operand (`targets[0]`) is 1.
fn asymmetric_gate() -> GateDefinition {
    let mut m = Array2::<Complex64>::zeros((4, 4));
    m[[0b00, 0b00]] = c(1.0, 0.0);
    m[[0b01, 0b01]] = c(1.0, 0.0);
    m[[0b10, 0b11]] = c(1.0, 0.0);
    m[[0b11, 0b10]] = c(1.0, 0.0);
    GateDefinition::new(m).unwrap()
}

#[test]
fn targets_zero_is_most_significant_gate_bit() {
    let x = StandardGate::X.definition().unwrap();
    let gate = asymmetric_gate();

    // targets = [1, 0]: register qubit 1 plays the gate's high bit.
    let mut sv = StateVector::zero(2);
    sv.apply_gate(&x, &[1]).unwrap();
    sv.apply_gate(&gate, &[1, 0]).unwrap();
    assert!((sv.probability(0b11) - 1.0).abs() < EPSILON);

    // targets = [0, 1]: register qubit 0 plays the gate's high bit.
    let mut sv = StateVector::zero(2);
    sv.apply_gate(&x, &[0]).unwrap();
    sv.apply_gate(&gate, &[0, 1]).unwrap();
    assert!((sv.probability(0b11) - 1.0).abs() < EPSILON);

    // And with the high operand unset, nothing happens.
    let mut sv = StateVector::zero(2);
    sv.apply_gate(&x, &[0]).unwrap();
    sv.apply_gate(&gate, &[1, 0]).unwrap();
    assert!((sv.probability(0b01) - 1.0).abs() < EPSILON);
}

// ---------------------------------------------------------------------------
// Validation and registry interplay
// ---------------------------------------------------------------------------

#[test]
fn compose_rejects_bad_indices() {
    let x = StandardGate::X.definition().unwrap();

    assert!(matches!(
        compose(&x, &[5], &[], 3),
        Err(StateError::InvalidTarget { qubit: 5, .. })
    ));
    assert!(matches!(
        compose(&x, &[0], &[3], 3),
        Err(StateError::InvalidTarget { qubit: 3, .. })
    ));
    assert!(matches!(
        compose(&x, &[1], &[1], 3),
        Err(StateError::DuplicateQubit { qubit: 1 })
    ));
    assert!(matches!(
        compose(&x, &[0], &[1, 1], 3),
        Err(StateError::DuplicateQubit { qubit: 1 })
    ));
}

#[test]
fn every_registry_gate_composes_to_a_unitary() {
    let registry = GateRegistry::with_standard_gates().unwrap();
    for name in registry.names() {
        let def = registry.lookup(name).unwrap();
        let targets: Vec<u32> = (0..def.arity()).collect();
        let op = compose(def, &targets, &[], 3).unwrap();
        assert!(op.is_unitary(), "{name} composed to a non-unitary operator");
    }
}
