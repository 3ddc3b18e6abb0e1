//! Quantum circuit structure
//!
//! Provides the ordered gate-application sequence handed to downstream
//! consumers. Order is time-ordered application and is semantically
//! significant.

use crate::error::{TfimError, TfimResult};
use crate::gate::Gate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum circuit over a fixed number of wires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits
    num_qubits: usize,

    /// Gate sequence
    gates: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: Some(name.into()),
        }
    }

    /// Create from a vector of gates
    pub fn from_gates(num_qubits: usize, gates: Vec<Gate>) -> TfimResult<Self> {
        let circuit = Self {
            num_qubits,
            gates,
            name: None,
        };
        circuit.validate_gates()?;
        Ok(circuit)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Add a gate to the circuit
    ///
    /// Every target qubit index must be below the circuit's qubit count.
    pub fn add_gate(&mut self, gate: Gate) -> TfimResult<()> {
        for &qubit in &gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(TfimError::GateQubitMismatch {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> TfimResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get gates in application order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest wire-local path)
    pub fn depth(&self) -> usize {
        let mut qubit_depths = vec![0usize; self.num_qubits];

        for gate in &self.gates {
            let qubits = gate.qubits();
            let max_depth = qubits
                .iter()
                .filter_map(|&q| qubit_depths.get(q))
                .max()
                .copied()
                .unwrap_or(0);

            for &q in &qubits {
                if q < self.num_qubits {
                    qubit_depths[q] = max_depth + 1;
                }
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Get total gate count
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Count single-qubit gates
    pub fn count_1q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }

    /// Count parameterized gates
    pub fn count_parameterized(&self) -> usize {
        self.gates.iter().filter(|g| g.is_parameterized()).count()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate all gates in the circuit
    fn validate_gates(&self) -> TfimResult<()> {
        for gate in &self.gates {
            for &qubit in &gate.qubits() {
                if qubit >= self.num_qubits {
                    return Err(TfimError::GateQubitMismatch {
                        qubit,
                        num_qubits: self.num_qubits,
                    });
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Convert to OpenQASM 2.0 string
    ///
    /// The derived gates are declared as `sy`/`sydg` when present; QASM 2.0
    /// gate bodies are global-phase-free, so `ry(±pi/2)` bodies suffice.
    pub fn to_qasm(&self) -> String {
        let mut lines = Vec::new();

        // Header
        lines.push("OPENQASM 2.0;".to_string());
        lines.push("include \"qelib1.inc\";".to_string());
        lines.push(String::new());

        // Derived gate declarations
        let uses_sy = self
            .gates
            .iter()
            .any(|g| matches!(g, Gate::SqrtY(_) | Gate::SqrtYdg(_)));
        if uses_sy {
            lines.push("gate sy a { ry(pi/2) a; }".to_string());
            lines.push("gate sydg a { ry(-pi/2) a; }".to_string());
            lines.push(String::new());
        }

        // Register declarations
        lines.push(format!("qreg q[{}];", self.num_qubits));
        lines.push(format!("creg c[{}];", self.num_qubits));
        lines.push(String::new());

        // Gates
        for gate in &self.gates {
            lines.push(gate.to_qasm());
        }

        lines.join("\n")
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> TfimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON, re-validating the gate/wire invariant
    pub fn from_json(json: &str) -> TfimResult<Self> {
        let circuit: Circuit = serde_json::from_str(json)?;
        circuit.validate_gates()?;
        Ok(circuit)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} gates)",
            self.num_qubits,
            self.gates.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
