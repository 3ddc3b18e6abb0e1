//! Circuit builder
//!
//! Fluent builder over [`Circuit`] with per-gate methods and the rotation
//! layer used by the Trotter construction.

use crate::circuit::Circuit;
use crate::error::{TfimError, TfimResult};
use crate::gate::Gate;
use crate::types::{Angle, QubitId};

/// Fluent circuit builder (consuming self pattern)
pub struct CircuitBuilder {
    /// Internal circuit being built
    circuit: Circuit,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new circuit builder
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
        }
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add S-dagger gate
    pub fn sdg(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Sdg(qubit));
        self
    }

    /// Add √Y gate
    pub fn sqrt_y(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::SqrtY(qubit));
        self
    }

    /// Add √Y† gate
    pub fn sqrt_ydg(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::SqrtYdg(qubit));
        self
    }

    /// Add Rx rotation
    pub fn rx(mut self, qubit: QubitId, angle: Angle) -> Self {
        let _ = self.circuit.add_gate(Gate::Rx(qubit, angle));
        self
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    /// Add CNOT gate
    pub fn cnot(mut self, control: QubitId, target: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Cnot(control, target));
        self
    }

    /// Alias for cnot
    pub fn cx(self, control: QubitId, target: QubitId) -> Self {
        self.cnot(control, target)
    }

    // ========================================================================
    // Layer Operations
    // ========================================================================

    /// Add Rx rotation layer with a uniform angle on all qubits
    pub fn rx_layer(mut self, angle: Angle) -> Self {
        for q in 0..self.circuit.num_qubits() {
            let _ = self.circuit.add_gate(Gate::Rx(q, angle));
        }
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build and return the circuit
    pub fn build(self) -> Circuit {
        self.circuit
    }

    /// Build, rejecting an empty circuit
    pub fn build_validated(self) -> TfimResult<Circuit> {
        if self.circuit.is_empty() {
            return Err(TfimError::EmptyCircuit);
        }
        Ok(self.circuit)
    }

    /// Get reference to current circuit state
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let circuit = CircuitBuilder::new(2)
            .sdg(0)
            .sdg(1)
            .sqrt_y(1)
            .cnot(0, 1)
            .sqrt_ydg(1)
            .build();

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.gate_count(), 5);
        assert_eq!(circuit.count_2q(), 1);
    }

    #[test]
    fn test_builder_rx_layer() {
        let circuit = CircuitBuilder::new(4).rx_layer(0.5).build();

        assert_eq!(circuit.gate_count(), 4);
        assert_eq!(circuit.count_parameterized(), 4);
        for (q, gate) in circuit.gates().iter().enumerate() {
            assert_eq!(*gate, Gate::Rx(q, 0.5));
        }
    }

    #[test]
    fn test_builder_cx_alias() {
        let a = CircuitBuilder::new(2).cnot(0, 1).build();
        let b = CircuitBuilder::new(2).cx(0, 1).build();
        assert_eq!(a.gates(), b.gates());
    }

    #[test]
    fn test_builder_ignores_out_of_range() {
        // Out-of-range appends are dropped; the circuit stays valid.
        let circuit = CircuitBuilder::new(2).sdg(0).sdg(7).build();
        assert_eq!(circuit.gate_count(), 1);
    }

    #[test]
    fn test_build_validated_empty() {
        let result = CircuitBuilder::new(3).build_validated();
        assert_eq!(result.unwrap_err(), TfimError::EmptyCircuit);
    }

    #[test]
    fn test_builder_with_name() {
        let builder = CircuitBuilder::with_name(2, "layer");
        assert_eq!(builder.circuit().name(), Some("layer"));
        assert_eq!(builder.num_qubits(), 2);
    }
}
