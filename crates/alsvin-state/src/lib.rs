//! `alsvin-state` — operator composition and statevector evolution.
//!
//! The execution half of the Alsvin core: takes immutable
//! [`GateDefinition`](alsvin_gates::GateDefinition)s from `alsvin-gates`,
//! expands them into full-register operators with [`compose`], and
//! evolves a [`StateVector`] through application, measurement, and
//! collapse.
//!
//! Everything here is synchronous and single-threaded per state vector:
//! one simulation owns one `StateVector`, and measurement randomness is
//! an injected [`rand::Rng`], never global state.
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_gates::GateRegistry;
//! use alsvin_state::{StateVector, compose};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let registry = GateRegistry::with_standard_gates().unwrap();
//! let h = registry.lookup("h").unwrap();
//! let x = registry.lookup("x").unwrap();
//!
//! // Bell pair: H on qubit 0, then X on qubit 1 controlled by qubit 0.
//! let mut psi = StateVector::zero(2);
//! psi.apply(&compose(h, &[0], &[], 2).unwrap()).unwrap();
//! psi.apply(&compose(x, &[1], &[0], 2).unwrap()).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let bits = psi.measure(&[0, 1], &mut rng).unwrap();
//! assert_eq!(bits[0], bits[1]);
//! ```

pub mod error;
pub mod operator;
pub mod statevector;

pub use error::{StateError, StateResult};
pub use operator::{ComposedOperator, compose};
pub use statevector::StateVector;
