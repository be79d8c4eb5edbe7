//! Alsvin gate definitions
//!
//! This crate provides the value types of the Alsvin simulation core:
//! validated unitary matrices, gate definitions (fixed and parametrized),
//! and the name → definition registry. It holds no simulation state —
//! operator expansion and state-vector evolution live in `alsvin-state`.
//!
//! # Design
//!
//! A gate is defined exactly once, by its base matrix. Controlled and
//! multi-qubit expansions are always derived downstream by the composer,
//! never stored next to the base matrix, so the two can't drift apart.
//!
//! All unitarity and normalization comparisons go through the epsilon
//! rules in [`approx`] — exact floating-point equality is never used.
//!
//! # Example
//!
//! ```rust
//! use alsvin_gates::{GateRegistry, StandardGate};
//!
//! let mut registry = GateRegistry::with_standard_gates().unwrap();
//!
//! // Parametrized gates are registered with their parameter baked in.
//! let quarter_turn = StandardGate::Rz(std::f64::consts::PI / 2.0);
//! registry.register("rz_quarter", quarter_turn.definition().unwrap()).unwrap();
//!
//! let not = registry.lookup("x").unwrap();
//! assert_eq!(not.arity(), 1);
//! ```

pub mod approx;
pub mod error;
pub mod gate;
pub mod matrix;
pub mod registry;

pub use error::{GateError, GateResult};
pub use gate::{GateDefinition, StandardGate};
pub use matrix::GateMatrix;
pub use registry::GateRegistry;
