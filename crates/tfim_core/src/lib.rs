//! # TFIM Core
//!
//! Gates, circuits, and derived-unitary algebra for the TFIM Trotter
//! circuit toolkit.
//!
//! ## Architecture
//!
//! ```text
//! tfim_core
//!     Foundation
//!         CoreTypes // QubitId, Angle
//!         Errors // TfimError, TfimResult
//!     Circuit
//!         Gate // Sdg, SqrtY, SqrtYdg, Rx, Cnot
//!         Circuit // ordered gate sequence over fixed wires
//!         CircuitBuilder // fluent construction
//!     Unitary
//!         Matrix2 // 2x2 complex algebra
//!         DerivedGate // sqrt_y(), sqrt_y_dag()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tfim_core::prelude::*;
//!
//! // Build the five-gate entangling gadget on one bond
//! let circuit = CircuitBuilder::new(2)
//!     .sdg(0)
//!     .sdg(1)
//!     .sqrt_y(1)
//!     .cnot(0, 1)
//!     .sqrt_ydg(1)
//!     .build();
//!
//! assert_eq!(circuit.gate_count(), 5);
//! println!("{}", circuit.to_qasm());
//! ```
//!
//! ## Derived Gates
//!
//! ```rust
//! use tfim_core::unitary::{self, Matrix2, DEFAULT_TOLERANCE};
//!
//! // √Y squares back to Pauli-Y, and cancels against √Y†
//! let sy = unitary::sqrt_y().matrix();
//! assert!(sy.mul(sy).approx_eq(&Matrix2::pauli_y(), DEFAULT_TOLERANCE));
//!
//! let product = sy.mul(unitary::sqrt_y_dag().matrix());
//! assert!(product.approx_eq(&Matrix2::identity(), DEFAULT_TOLERANCE));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core type aliases
pub mod types;

/// Error types
pub mod error;

/// Quantum gates
pub mod gate;

/// Circuit structure
pub mod circuit;

/// Circuit builder
pub mod builder;

/// 2×2 unitary algebra and derived gate constants
pub mod unitary;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use error::{TfimError, TfimResult};
pub use gate::Gate;
pub use types::{Angle, QubitId};
pub use unitary::{DerivedGate, Matrix2, DEFAULT_TOLERANCE};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use tfim_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::error::{TfimError, TfimResult};
    pub use crate::gate::Gate;
    pub use crate::types::{Angle, QubitId};
    pub use crate::unitary::{DerivedGate, Matrix2, DEFAULT_TOLERANCE};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::unitary;

    #[test]
    fn test_bond_gadget_qasm() {
        let circuit = CircuitBuilder::with_name(2, "bond")
            .sdg(0)
            .sdg(1)
            .sqrt_y(1)
            .cnot(0, 1)
            .sqrt_ydg(1)
            .build();

        let qasm = circuit.to_qasm();
        assert!(qasm.contains("gate sy a { ry(pi/2) a; }"));
        assert!(qasm.contains("sdg q[0];"));
        assert!(qasm.contains("sy q[1];"));
        assert!(qasm.contains("cx q[0],q[1];"));
        assert!(qasm.contains("sydg q[1];"));
    }

    #[test]
    fn test_bond_gadget_analysis() {
        let circuit = CircuitBuilder::new(2)
            .sdg(0)
            .sdg(1)
            .sqrt_y(1)
            .cnot(0, 1)
            .sqrt_ydg(1)
            .build();

        assert_eq!(circuit.count_1q(), 4);
        assert_eq!(circuit.count_2q(), 1);
        // Wire 1 sees all five operations
        assert_eq!(circuit.depth(), 4);
    }

    #[test]
    fn test_derived_gate_identities() {
        let sy = unitary::sqrt_y().matrix();
        let sydg = unitary::sqrt_y_dag().matrix();

        assert!(sy.mul(sy).approx_eq(&Matrix2::pauli_y(), DEFAULT_TOLERANCE));
        assert!(sy
            .mul(sydg)
            .approx_eq(&Matrix2::identity(), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_gate_matrix_matches_derived_constant() {
        let via_gate = Gate::SqrtY(0).matrix2().unwrap();
        assert!(via_gate.approx_eq(unitary::sqrt_y().matrix(), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_circuit_json_roundtrip_via_builder() {
        let circuit = CircuitBuilder::new(3).rx_layer(0.25).cnot(0, 1).build();

        let json = circuit.to_json().unwrap();
        assert_eq!(Circuit::from_json(&json).unwrap(), circuit);
    }
}
