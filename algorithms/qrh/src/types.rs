//! Shared types used across the QRH library.

use crate::kernels::constants::{DIFFUSIONS, HALF_ROUNDS, MATRIX_ROUNDS};
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// ROUND CONFIGURATION
// =============================================================================

/// Quadruple mix applied to each column and diagonal of the matrix phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixMix {
    /// `add3, add3, round4, add3, add3` (default)
    #[default]
    Standard,
    /// Three interleaved `round4` passes with reversed lane orders.
    /// Roughly three times the cost of `Standard`.
    Heavy,
}

/// Round counts for the permutation engine.
///
/// Only [`Rounds::STANDARD`] produces QRH-256 digests; every other
/// configuration is a distinct function.
///
/// # Example
/// ```rust
/// use qrh::{hash, hash_with_rounds, MatrixMix, Rounds};
///
/// let standard = hash_with_rounds(b"abc", &Rounds::STANDARD);
/// assert_eq!(standard, hash(b"abc"));
///
/// let heavy = Rounds::STANDARD.with_matrix(MatrixMix::Heavy);
/// assert_ne!(hash_with_rounds(b"abc", &heavy), standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rounds {
    /// Ring-phase repetitions.
    pub half_rounds: usize,
    /// Matrix-phase repetitions.
    pub matrix_rounds: usize,
    /// Diffusion passes.
    pub diffusions: usize,
    /// Matrix-phase mixing function.
    pub matrix: MatrixMix,
}

impl Rounds {
    /// The QRH-256 parameter set: 4 ring rounds, 2 matrix rounds, 4 diffusions.
    pub const STANDARD: Self = Self::new(HALF_ROUNDS, MATRIX_ROUNDS, DIFFUSIONS);

    /// Round counts with the standard matrix mix.
    #[must_use]
    pub const fn new(half_rounds: usize, matrix_rounds: usize, diffusions: usize) -> Self {
        Self {
            half_rounds,
            matrix_rounds,
            diffusions,
            matrix: MatrixMix::Standard,
        }
    }

    /// Replace the matrix-phase mixing function.
    #[must_use]
    pub const fn with_matrix(mut self, matrix: MatrixMix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Returns `true` for the QRH-256 parameter set.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        self.half_rounds == HALF_ROUNDS
            && self.matrix_rounds == MATRIX_ROUNDS
            && self.diffusions == DIFFUSIONS
            && matches!(self.matrix, MatrixMix::Standard)
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by the fallible entry points.
///
/// Hashing itself is total; only the HMAC concatenation buffer can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrhError {
    /// The HMAC inner buffer (`64 + message.len()` bytes) could not be allocated.
    Allocation {
        /// Bytes requested.
        requested: usize,
    },
}

impl QrhError {
    /// Allocation failure for a buffer of `requested` bytes.
    pub const fn allocation(requested: usize) -> Self {
        Self::Allocation { requested }
    }
}

impl fmt::Display for QrhError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { requested } => {
                write!(f, "failed to allocate {requested} bytes for the HMAC buffer")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for QrhError {}
