//! Gate registry.

use rustc_hash::FxHashMap;

use crate::error::{GateError, GateResult};
use crate::gate::{GateDefinition, StandardGate};

/// Append-only map from gate names to definitions.
///
/// Registration is expected to happen during a single-threaded setup
/// phase; afterwards the registry is read-only and can be shared freely
/// across threads (`&self` everywhere, no interior mutability).
#[derive(Debug, Default)]
pub struct GateRegistry {
    gates: FxHashMap<String, GateDefinition>,
}

impl GateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the fixed standard gates
    /// under their canonical names (`id`, `x`, `y`, `z`, `h`, `s`,
    /// `sdg`, `t`, `tdg`, `sx`, `sxdg`, `swap`, `iswap`).
    ///
    /// Parametrized gates are not included — they need a parameter value
    /// before they have a matrix to register.
    pub fn with_standard_gates() -> GateResult<Self> {
        let mut registry = Self::new();
        for gate in [
            StandardGate::I,
            StandardGate::X,
            StandardGate::Y,
            StandardGate::Z,
            StandardGate::H,
            StandardGate::S,
            StandardGate::Sdg,
            StandardGate::T,
            StandardGate::Tdg,
            StandardGate::SX,
            StandardGate::SXdg,
            StandardGate::Swap,
            StandardGate::ISwap,
        ] {
            registry.register(gate.name(), gate.definition()?)?;
        }
        Ok(registry)
    }

    /// Register a gate definition under `name`.
    ///
    /// Fails with [`GateError::DuplicateGate`] if the name is taken.
    /// There is no removal API: entries live as long as the registry.
    pub fn register(&mut self, name: impl Into<String>, def: GateDefinition) -> GateResult<()> {
        let name = name.into();
        if self.gates.contains_key(&name) {
            return Err(GateError::DuplicateGate(name));
        }
        self.gates.insert(name, def);
        Ok(())
    }

    /// Look up a gate definition by name.
    ///
    /// Fails with [`GateError::UnknownGate`] if absent. No implicit gate
    /// creation.
    pub fn lookup(&self, name: &str) -> GateResult<&GateDefinition> {
        self.gates
            .get(name)
            .ok_or_else(|| GateError::UnknownGate(name.to_string()))
    }

    /// Iterate over registered names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.gates.keys().map(String::as_str)
    }

    /// Number of registered gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}
