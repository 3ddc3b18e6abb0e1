//! Quantum gate definitions
//!
//! Tagged gate-application variant covering the vocabulary of the TFIM
//! Trotter construction, consumed uniformly by any rendering, simulation,
//! or export backend.

use crate::types::{Angle, QubitId};
use crate::unitary::{self, Matrix2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum gate enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================
    /// S-dagger gate (inverse of S)
    Sdg(QubitId),

    /// Square root of Pauli-Y (principal branch)
    SqrtY(QubitId),

    /// Inverse square root of Pauli-Y
    SqrtYdg(QubitId),

    /// Rotation around X-axis
    Rx(QubitId, Angle),

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================
    /// Controlled-NOT (control, target)
    Cnot(QubitId, QubitId),
}

impl Gate {
    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Get qubits involved in this gate, control first for two-qubit gates
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::Sdg(q) | Gate::SqrtY(q) | Gate::SqrtYdg(q) | Gate::Rx(q, _) => vec![*q],
            Gate::Cnot(c, t) => vec![*c, *t],
        }
    }

    /// Check if gate is single-qubit
    pub fn is_single_qubit(&self) -> bool {
        matches!(
            self,
            Gate::Sdg(_) | Gate::SqrtY(_) | Gate::SqrtYdg(_) | Gate::Rx(_, _)
        )
    }

    /// Check if gate is two-qubit
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Gate::Cnot(_, _))
    }

    /// Check if gate carries an angle parameter
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Gate::Rx(_, _))
    }

    /// Get gate name
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Sdg(_) => "sdg",
            Gate::SqrtY(_) => "sy",
            Gate::SqrtYdg(_) => "sydg",
            Gate::Rx(_, _) => "rx",
            Gate::Cnot(_, _) => "cx",
        }
    }

    /// Unitary matrix of a single-qubit gate, None for two-qubit gates
    pub fn matrix2(&self) -> Option<Matrix2> {
        match self {
            Gate::Sdg(_) => Some(Matrix2::sdg()),
            Gate::SqrtY(_) => Some(*unitary::sqrt_y().matrix()),
            Gate::SqrtYdg(_) => Some(*unitary::sqrt_y_dag().matrix()),
            Gate::Rx(_, theta) => Some(Matrix2::rx(*theta)),
            Gate::Cnot(_, _) => None,
        }
    }

    /// Convert to OpenQASM 2.0 string
    pub fn to_qasm(&self) -> String {
        match self {
            Gate::Sdg(q) => format!("sdg q[{}];", q),
            Gate::SqrtY(q) => format!("sy q[{}];", q),
            Gate::SqrtYdg(q) => format!("sydg q[{}];", q),
            Gate::Rx(q, theta) => format!("rx({}) q[{}];", theta, q),
            Gate::Cnot(c, t) => format!("cx q[{}],q[{}];", c, t),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================
