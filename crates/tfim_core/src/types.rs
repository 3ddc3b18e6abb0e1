//! Core types for the TFIM toolkit
//!
//! Fundamental type aliases shared by every crate in the workspace.

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed wire)
pub type QubitId = usize;

/// Rotation angle in radians
pub type Angle = f64;
