//! 1D TFIM Trotter chain demo
//!
//! Builds the textbook 6-qubit, single-step configuration with a π/2
//! transverse-field rotation and prints the circuit summary and its
//! OpenQASM text.

use std::f64::consts::PI;
use tfim_trotter::TfimGenerator;

fn main() {
    let num_qubits = 6;
    let steps = 1;
    let rx_angle = 0.5 * PI;

    let generator = TfimGenerator::new(num_qubits, steps, rx_angle);
    let circuit = generator.generate().expect("valid chain configuration");

    println!("1D TFIM Trotter circuit");
    println!("  Qubits: {}", num_qubits);
    println!("  Steps: {}", steps);
    println!("  Rx angle: {:.4} rad", rx_angle);
    println!();
    println!("{}", circuit);
    println!("{}", circuit.to_qasm());
}
