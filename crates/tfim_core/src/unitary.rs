//! 2×2 unitary algebra and derived gate constants
//!
//! Provides the matrix square-root machinery behind the √Y and √Y† gates
//! used by the TFIM entangling gadget. Derived gates are computed once and
//! shared process-wide; they are never mutated after initialization.

use crate::error::{TfimError, TfimResult};
use crate::types::Angle;
use num_complex::Complex64;
use std::sync::OnceLock;

/// Default element-wise tolerance for unitarity and identity checks
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

// ============================================================================
// Matrix2
// ============================================================================

/// 2×2 complex matrix in row-major order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2 {
    m: [[Complex64; 2]; 2],
}

impl Matrix2 {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create from row-major elements
    pub const fn new(m: [[Complex64; 2]; 2]) -> Self {
        Self { m }
    }

    /// Identity matrix
    pub const fn identity() -> Self {
        Self::new([[ONE, ZERO], [ZERO, ONE]])
    }

    /// Pauli-Y matrix
    /// Y = [[0, -i],
    ///      [i,  0]]
    pub const fn pauli_y() -> Self {
        Self::new([[ZERO, NEG_I], [I, ZERO]])
    }

    /// S-dagger matrix
    /// S† = [[1,  0],
    ///       [0, -i]]
    pub const fn sdg() -> Self {
        Self::new([[ONE, ZERO], [ZERO, NEG_I]])
    }

    /// Rotation around the X-axis by `theta` radians
    pub fn rx(theta: Angle) -> Self {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new(0.0, -(theta / 2.0).sin());
        Self::new([[c, s], [s, c]])
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.m[row][col]
    }

    // ========================================================================
    // Algebra
    // ========================================================================

    /// Matrix product `self · other`
    pub fn mul(&self, other: &Self) -> Self {
        let mut out = [[ZERO; 2]; 2];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem = self.m[r][0] * other.m[0][c] + self.m[r][1] * other.m[1][c];
            }
        }
        Self::new(out)
    }

    /// Element-wise sum
    pub fn add(&self, other: &Self) -> Self {
        let mut out = [[ZERO; 2]; 2];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem = self.m[r][c] + other.m[r][c];
            }
        }
        Self::new(out)
    }

    /// Element-wise difference
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = [[ZERO; 2]; 2];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem = self.m[r][c] - other.m[r][c];
            }
        }
        Self::new(out)
    }

    /// Scalar multiple
    pub fn scale(&self, factor: Complex64) -> Self {
        let mut out = [[ZERO; 2]; 2];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem = self.m[r][c] * factor;
            }
        }
        Self::new(out)
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Self {
        Self::new([
            [self.m[0][0].conj(), self.m[1][0].conj()],
            [self.m[0][1].conj(), self.m[1][1].conj()],
        ])
    }

    /// Trace
    pub fn trace(&self) -> Complex64 {
        self.m[0][0] + self.m[1][1]
    }

    /// Determinant
    pub fn det(&self) -> Complex64 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Largest element-wise absolute difference
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        let mut max = 0.0f64;
        for r in 0..2 {
            for c in 0..2 {
                max = max.max((self.m[r][c] - other.m[r][c]).norm());
            }
        }
        max
    }

    /// Element-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.max_abs_diff(other) <= tolerance
    }

    /// Check `self · self† == I` within `tolerance`
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.mul(&self.adjoint())
            .approx_eq(&Self::identity(), tolerance)
    }

    // ========================================================================
    // Principal Square Root
    // ========================================================================

    /// Principal matrix square root of a unitary
    ///
    /// Uses the spectral decomposition of the 2×2 input: each eigenvalue is
    /// mapped through the principal branch of the complex square root and
    /// recombined via its spectral projector. A repeated eigenvalue is
    /// accepted only for scalar matrices.
    ///
    /// # Errors
    ///
    /// [`TfimError::NonUnitaryMatrix`] if the input fails the unitarity
    /// check, [`TfimError::NotDiagonalizable`] if the spectrum is degenerate
    /// on a non-scalar matrix.
    pub fn principal_sqrt(&self, tolerance: f64) -> TfimResult<Self> {
        if !self.is_unitary(tolerance) {
            let deviation = self.mul(&self.adjoint()).max_abs_diff(&Self::identity());
            return Err(TfimError::NonUnitaryMatrix {
                deviation,
                tolerance,
            });
        }

        let tr = self.trace();
        let det = self.det();
        let disc = (tr * tr - det * 4.0).sqrt();
        let l1 = (tr + disc) * 0.5;
        let l2 = (tr - disc) * 0.5;

        if (l1 - l2).norm() <= tolerance {
            // Degenerate spectrum: only the scalar multiple of I has a
            // well-defined spectral square root here.
            if self.approx_eq(&Self::identity().scale(l1), tolerance) {
                return Ok(Self::identity().scale(l1.sqrt()));
            }
            return Err(TfimError::NotDiagonalizable);
        }

        // Spectral projectors: P_k = (A - l_j I) / (l_k - l_j)
        let p1 = self.sub(&Self::identity().scale(l2)).scale(ONE / (l1 - l2));
        let p2 = self.sub(&Self::identity().scale(l1)).scale(ONE / (l2 - l1));

        Ok(p1.scale(l1.sqrt()).add(&p2.scale(l2.sqrt())))
    }
}

// ============================================================================
// Derived Gates
// ============================================================================

/// A labelled 2×2 unitary derived from a base matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGate {
    label: &'static str,
    matrix: Matrix2,
}

impl DerivedGate {
    /// Principal square root of `base`, carrying a display label
    pub fn sqrt_of(label: &'static str, base: &Matrix2) -> TfimResult<Self> {
        let matrix = base.principal_sqrt(DEFAULT_TOLERANCE)?;
        Ok(Self { label, matrix })
    }

    /// Conjugate-transpose of this gate under a new label
    pub fn inverse(&self, label: &'static str) -> Self {
        Self {
            label,
            matrix: self.matrix.adjoint(),
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The gate's unitary matrix
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }
}

static SQRT_Y: OnceLock<DerivedGate> = OnceLock::new();
static SQRT_Y_DAG: OnceLock<DerivedGate> = OnceLock::new();

/// Square root of the Pauli-Y matrix, labelled "√Y"
pub fn sqrt_y() -> &'static DerivedGate {
    SQRT_Y.get_or_init(|| {
        DerivedGate::sqrt_of("√Y", &Matrix2::pauli_y()).expect("Pauli-Y is unitary")
    })
}

/// Conjugate transpose of √Y, labelled "√Y†"
pub fn sqrt_y_dag() -> &'static DerivedGate {
    SQRT_Y_DAG.get_or_init(|| sqrt_y().inverse("√Y†"))
}

// ============================================================================
// Tests
// ============================================================================
