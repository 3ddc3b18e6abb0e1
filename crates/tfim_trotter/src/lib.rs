//! # TFIM Trotter
//!
//! Layered circuit generation for the 1D transverse field Ising chain.
//!
//! Each Trotter step is an even-bond entangling layer, an odd-bond
//! entangling layer, and a uniform Rx rotation layer; steps repeat in
//! strict sequence. The output is a plain [`tfim_core::Circuit`] for
//! downstream rendering, simulation, or hardware submission.
//!
//! ## Architecture
//!
//! ```text
//! tfim_trotter
//!     Layer
//!         even_bonds / odd_bonds // chain bond enumeration
//!         bond // five-gate entangling gadget
//!         trotter_layer // one full step
//!     Generator
//!         TfimGenerator // num_qubits, steps, rx_angle
//!         generate_1d_tfim // convenience entry point
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tfim_trotter::prelude::*;
//!
//! let circuit = TfimGenerator::new(6, 1, std::f64::consts::FRAC_PI_2)
//!     .generate()
//!     .unwrap();
//!
//! // 3 even bonds + 2 odd bonds at 5 gates each, plus 6 rotations
//! assert_eq!(circuit.gate_count(), 31);
//! println!("{}", circuit);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Trotter layer construction
pub mod layer;

/// 1D TFIM circuit generator
pub mod generator;

// ============================================================================
// Re-exports
// ============================================================================

pub use generator::{generate_1d_tfim, TfimGenerator};
pub use layer::{bond, even_bonds, odd_bonds, trotter_layer};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use tfim_trotter::prelude::*;
    //! ```

    pub use crate::generator::{generate_1d_tfim, TfimGenerator};
    pub use crate::layer::{bond, even_bonds, odd_bonds, trotter_layer};
    pub use tfim_core::prelude::*;
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
