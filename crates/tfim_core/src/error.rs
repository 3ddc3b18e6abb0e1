//! Error types for the TFIM toolkit
//!
//! All failures are local precondition or postcondition violations detected
//! eagerly at construction time; nothing here is retried.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for the TFIM toolkit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TfimError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Qubit count below the minimum of one wire
    #[error("Invalid qubit count {0}: must be at least 1")]
    InvalidQubitCount(usize),

    /// Non-finite rotation angle
    #[error("Invalid angle {0}: must be finite")]
    InvalidAngle(f64),

    // ========================================================================
    // Circuit Errors
    // ========================================================================
    /// Empty circuit where at least one gate is required
    #[error("Circuit is empty")]
    EmptyCircuit,

    /// Gate on non-existent qubit
    #[error("Gate references qubit {qubit} but circuit has only {num_qubits} qubits")]
    GateQubitMismatch { qubit: usize, num_qubits: usize },

    // ========================================================================
    // Unitary Errors
    // ========================================================================
    /// Matrix failed the unitarity check
    #[error("Matrix is not unitary: deviation {deviation:.3e} exceeds tolerance {tolerance:.3e}")]
    NonUnitaryMatrix { deviation: f64, tolerance: f64 },

    /// Degenerate spectrum on a non-scalar matrix
    #[error("Matrix is not diagonalizable: repeated eigenvalue on a non-scalar matrix")]
    NotDiagonalizable,

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for TFIM operations
pub type TfimResult<T> = Result<T, TfimError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for TfimError {
    fn from(err: serde_json::Error) -> Self {
        TfimError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl TfimError {
    /// Check if error is an invalid-argument failure
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            TfimError::InvalidQubitCount(_) | TfimError::InvalidAngle(_)
        )
    }

    /// Check if error is a malformed-matrix failure
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            TfimError::NonUnitaryMatrix { .. } | TfimError::NotDiagonalizable
        )
    }

    /// Check if error is a circuit error
    pub fn is_circuit_error(&self) -> bool {
        matches!(
            self,
            TfimError::EmptyCircuit | TfimError::GateQubitMismatch { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
