//! Trotter layer construction
//!
//! Bond enumeration and the five-gate entangling gadget for one Trotter
//! step of the 1D chain. Ordering within and across layers is part of the
//! circuit's physical semantics: the even-bond layer completes before the
//! odd-bond layer, which completes before the rotation layer.

use tfim_core::{Angle, CircuitBuilder, QubitId};

// ============================================================================
// Bond Enumeration
// ============================================================================

/// Even bonds (0,1), (2,3), … of an `num_qubits`-wire chain
pub fn even_bonds(num_qubits: usize) -> Vec<(QubitId, QubitId)> {
    (0..num_qubits.saturating_sub(1))
        .step_by(2)
        .map(|i| (i, i + 1))
        .collect()
}

/// Odd bonds (1,2), (3,4), … of an `num_qubits`-wire chain
pub fn odd_bonds(num_qubits: usize) -> Vec<(QubitId, QubitId)> {
    (1..num_qubits.saturating_sub(1))
        .step_by(2)
        .map(|i| (i, i + 1))
        .collect()
}

// ============================================================================
// Layer Construction
// ============================================================================

/// Append the entangling gadget for one bond
///
/// Sdg on both wires, √Y on the target, CNOT, √Y† on the target — five
/// gate applications per bond.
pub fn bond(builder: CircuitBuilder, control: QubitId, target: QubitId) -> CircuitBuilder {
    builder
        .sdg(control)
        .sdg(target)
        .sqrt_y(target)
        .cnot(control, target)
        .sqrt_ydg(target)
}

/// Append one full Trotter layer
///
/// Even bonds in ascending order, then odd bonds, then Rx(`rx_angle`) on
/// every wire.
pub fn trotter_layer(builder: CircuitBuilder, rx_angle: Angle) -> CircuitBuilder {
    let num_qubits = builder.num_qubits();
    let mut builder = builder;

    for (control, target) in even_bonds(num_qubits) {
        builder = bond(builder, control, target);
    }
    for (control, target) in odd_bonds(num_qubits) {
        builder = bond(builder, control, target);
    }

    builder.rx_layer(rx_angle)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tfim_core::Gate;

    #[test]
    fn test_even_bonds() {
        assert_eq!(even_bonds(6), vec![(0, 1), (2, 3), (4, 5)]);
        assert_eq!(even_bonds(5), vec![(0, 1), (2, 3)]);
        assert_eq!(even_bonds(2), vec![(0, 1)]);
        assert!(even_bonds(1).is_empty());
        assert!(even_bonds(0).is_empty());
    }

    #[test]
    fn test_odd_bonds() {
        assert_eq!(odd_bonds(6), vec![(1, 2), (3, 4)]);
        assert_eq!(odd_bonds(5), vec![(1, 2), (3, 4)]);
        assert_eq!(odd_bonds(3), vec![(1, 2)]);
        assert!(odd_bonds(2).is_empty());
        assert!(odd_bonds(1).is_empty());
    }

    #[test]
    fn test_bond_gadget_sequence() {
        let circuit = bond(CircuitBuilder::new(2), 0, 1).build();

        assert_eq!(
            circuit.gates(),
            &[
                Gate::Sdg(0),
                Gate::Sdg(1),
                Gate::SqrtY(1),
                Gate::Cnot(0, 1),
                Gate::SqrtYdg(1),
            ]
        );
    }

    #[test]
    fn test_trotter_layer_counts() {
        // 6 wires: 3 even bonds + 2 odd bonds, 5 gates each, plus 6 Rx
        let circuit = trotter_layer(CircuitBuilder::new(6), 0.3).build();
        assert_eq!(circuit.gate_count(), 31);
        assert_eq!(circuit.count_2q(), 5);
        assert_eq!(circuit.count_parameterized(), 6);
    }

    #[test]
    fn test_trotter_layer_ordering() {
        let circuit = trotter_layer(CircuitBuilder::new(4), 0.3).build();
        let gates = circuit.gates();

        // Even bonds (0,1) and (2,3) first
        assert_eq!(gates[0], Gate::Sdg(0));
        assert_eq!(gates[3], Gate::Cnot(0, 1));
        assert_eq!(gates[8], Gate::Cnot(2, 3));

        // Odd bond (1,2) strictly after
        assert_eq!(gates[13], Gate::Cnot(1, 2));

        // Rotation layer last
        for (q, gate) in gates[15..].iter().enumerate() {
            assert_eq!(*gate, Gate::Rx(q, 0.3));
        }
    }

    #[test]
    fn test_trotter_layer_single_wire() {
        let circuit = trotter_layer(CircuitBuilder::new(1), 0.9).build();
        assert_eq!(circuit.gates(), &[Gate::Rx(0, 0.9)]);
    }
}
