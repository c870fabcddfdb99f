//! Accumulating Hasher
//!
//! QRH binds the total length into every block, so no block can be mixed
//! before the input is complete. `QrhHasher` collects `update` calls in
//! memory and runs the kernel once on `finalize`.

use crate::kernels::constants::HASH_SIZE;
use crate::oneshot::hash_with_rounds;
use crate::types::Rounds;

#[cfg(feature = "digest-trait")]
use digest::typenum::U32;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// ACCUMULATING HASHER
// =============================================================================

/// Buffering front-end producing the same digest as [`crate::hash`] over
/// the concatenation of every `update`.
///
/// # Example
/// ```rust
/// use qrh::Hasher;
///
/// let mut hasher = Hasher::new();
/// hasher.update(b"a");
/// hasher.update(b"bc");
/// assert_eq!(hasher.finalize(), qrh::hash(b"abc"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QrhHasher {
    /// Every byte seen so far
    buffer: Vec<u8>,
    rounds: Rounds,
}

impl QrhHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher with the QRH-256 round configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rounds(Rounds::STANDARD)
    }

    /// Create a hasher with a custom round configuration.
    #[must_use]
    pub const fn with_rounds(rounds: Rounds) -> Self {
        Self {
            buffer: Vec::new(),
            rounds,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Finalize and return the digest.
    #[must_use]
    pub fn finalize(self) -> [u8; HASH_SIZE] {
        hash_with_rounds(&self.buffer, &self.rounds)
    }

    /// Reset hasher for reuse, keeping the round configuration.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Bytes buffered so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been added since creation or reset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for QrhHasher {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for QrhHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for QrhHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for QrhHasher {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&hash_with_rounds(&self.buffer, &self.rounds));
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for QrhHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for QrhHasher {}
