//! 1D TFIM circuit generator
//!
//! Produces the Trotterized evolution circuit for the transverse field
//! Ising chain: per step, an even-bond layer, an odd-bond layer, and a
//! uniform Rx rotation layer.

use crate::layer;
use serde::{Deserialize, Serialize};
use tfim_core::{Angle, Circuit, CircuitBuilder, TfimError, TfimResult};

/// Trotterized 1D TFIM circuit generator
///
/// Pure construction: each call to [`generate`](TfimGenerator::generate)
/// returns a fresh circuit, so concurrent calls need no coordination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TfimGenerator {
    /// Number of qubits in the chain
    num_qubits: usize,

    /// Number of Trotter steps
    steps: usize,

    /// Rotation angle for the Rx layer (radians)
    rx_angle: Angle,
}

impl TfimGenerator {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new generator
    pub fn new(num_qubits: usize, steps: usize, rx_angle: Angle) -> Self {
        Self {
            num_qubits,
            steps,
            rx_angle,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits in the chain
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of Trotter steps
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Rotation angle for the Rx layer
    pub fn rx_angle(&self) -> Angle {
        self.rx_angle
    }

    /// Gate applications contributed by a single Trotter step
    pub fn gates_per_step(&self) -> usize {
        let bonds = layer::even_bonds(self.num_qubits).len() + layer::odd_bonds(self.num_qubits).len();
        5 * bonds + self.num_qubits
    }

    /// Total gate applications of the generated circuit
    pub fn gate_count(&self) -> usize {
        self.steps * self.gates_per_step()
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Generate the Trotterized circuit
    ///
    /// Zero steps yield an empty circuit; a single-wire chain gets the
    /// rotation layer only.
    ///
    /// # Errors
    ///
    /// [`TfimError::InvalidQubitCount`] if the chain has no wires,
    /// [`TfimError::InvalidAngle`] if the rotation angle is not finite.
    pub fn generate(&self) -> TfimResult<Circuit> {
        self.validate()?;

        let mut builder = CircuitBuilder::with_name(self.num_qubits, "tfim_1d");
        for _ in 0..self.steps {
            builder = layer::trotter_layer(builder, self.rx_angle);
        }

        Ok(builder.build())
    }

    fn validate(&self) -> TfimResult<()> {
        if self.num_qubits < 1 {
            return Err(TfimError::InvalidQubitCount(self.num_qubits));
        }
        if !self.rx_angle.is_finite() {
            return Err(TfimError::InvalidAngle(self.rx_angle));
        }
        Ok(())
    }
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Generate a Trotterized 1D TFIM circuit
pub fn generate_1d_tfim(num_qubits: usize, steps: usize, rx_angle: Angle) -> TfimResult<Circuit> {
    TfimGenerator::new(num_qubits, steps, rx_angle).generate()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use tfim_core::Gate;

    #[test]
    fn test_gate_count_formula() {
        for num_qubits in 1..=8 {
            for steps in 0..=3 {
                let generator = TfimGenerator::new(num_qubits, steps, 0.1);
                let circuit = generator.generate().unwrap();

                let bonds = num_qubits / 2 + (num_qubits - 1) / 2;
                let expected = steps * (5 * bonds + num_qubits);
                assert_eq!(circuit.gate_count(), expected);
                assert_eq!(generator.gate_count(), expected);
                assert_eq!(circuit.num_qubits(), num_qubits);
            }
        }
    }

    #[test]
    fn test_zero_steps_is_empty() {
        for num_qubits in [1, 2, 6, 11] {
            let circuit = generate_1d_tfim(num_qubits, 0, 0.7).unwrap();
            assert!(circuit.is_empty());
            assert_eq!(circuit.num_qubits(), num_qubits);
        }
    }

    #[test]
    fn test_single_qubit_chain() {
        // No bonds are possible; each step is exactly one rotation.
        let circuit = generate_1d_tfim(1, 4, 0.25).unwrap();
        assert_eq!(circuit.gates(), vec![Gate::Rx(0, 0.25); 4]);
    }

    #[test]
    fn test_two_qubit_three_steps() {
        // One even bond, no odd bonds: 3 × (5 + 2) gate applications
        let circuit = generate_1d_tfim(2, 3, 0.0).unwrap();
        assert_eq!(circuit.gate_count(), 21);
        assert_eq!(circuit.count_2q(), 3);
    }

    #[test]
    fn test_six_qubit_single_step() {
        let circuit = generate_1d_tfim(6, 1, 0.5 * PI).unwrap();
        assert_eq!(circuit.gate_count(), 31);

        let gates = circuit.gates();

        // Even layer bonds (0,1), (2,3), (4,5)
        assert_eq!(gates[3], Gate::Cnot(0, 1));
        assert_eq!(gates[8], Gate::Cnot(2, 3));
        assert_eq!(gates[13], Gate::Cnot(4, 5));

        // Odd layer bonds (1,2), (3,4)
        assert_eq!(gates[18], Gate::Cnot(1, 2));
        assert_eq!(gates[23], Gate::Cnot(3, 4));

        // Six Rx(π/2) applications close the step
        for (q, gate) in gates[25..].iter().enumerate() {
            assert_eq!(*gate, Gate::Rx(q, 0.5 * PI));
        }
    }

    #[test]
    fn test_layer_phase_ordering() {
        // Within every step: even-bond gates, then odd-bond gates, then Rx.
        let steps = 2;
        let generator = TfimGenerator::new(5, steps, 0.4);
        let circuit = generator.generate().unwrap();
        let per_step = generator.gates_per_step();

        let even_gates = 5 * layer::even_bonds(5).len();
        let odd_gates = 5 * layer::odd_bonds(5).len();

        for step in 0..steps {
            let chunk = &circuit.gates()[step * per_step..(step + 1) * per_step];

            let even_chunk = &chunk[..even_gates];
            let odd_chunk = &chunk[even_gates..even_gates + odd_gates];
            let rx_chunk = &chunk[even_gates + odd_gates..];

            assert!(even_chunk
                .iter()
                .filter(|g| g.is_two_qubit())
                .all(|g| matches!(g, Gate::Cnot(c, _) if c % 2 == 0)));
            assert!(odd_chunk
                .iter()
                .filter(|g| g.is_two_qubit())
                .all(|g| matches!(g, Gate::Cnot(c, _) if c % 2 == 1)));
            assert!(rx_chunk.iter().all(|g| matches!(g, Gate::Rx(_, _))));
        }
    }

    #[test]
    fn test_zero_qubits_rejected() {
        let err = generate_1d_tfim(0, 1, 0.0).unwrap_err();
        assert_eq!(err, TfimError::InvalidQubitCount(0));
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        let err = generate_1d_tfim(3, 1, f64::NAN).unwrap_err();
        assert!(matches!(err, TfimError::InvalidAngle(_)));

        let err = generate_1d_tfim(3, 1, f64::INFINITY).unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_validation_precedes_construction() {
        // Invalid arguments fail even when zero steps would emit no gates.
        assert!(generate_1d_tfim(0, 0, 0.0).is_err());
    }
}
