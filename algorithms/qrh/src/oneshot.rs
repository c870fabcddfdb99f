//! Public API Layer

use crate::kernels::constants::HASH_SIZE;
use crate::kernels::portable;
use crate::types::Rounds;
use subtle::ConstantTimeEq;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the QRH-256 digest of `input`.
///
/// Total over all inputs, including the empty slice.
///
/// # Example
/// ```rust
/// let digest = qrh::hash(b"abc");
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
    hash_with_rounds(input, &Rounds::STANDARD)
}

/// Compute the digest with a custom round configuration.
///
/// Only [`Rounds::STANDARD`] yields QRH-256 digests.
#[must_use]
#[inline]
pub fn hash_with_rounds(input: &[u8], rounds: &Rounds) -> [u8; HASH_SIZE] {
    portable::oneshot(input, rounds)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time.
///
/// # Example
/// ```rust
/// let data = b"Integrity";
/// let digest = qrh::hash(data);
/// assert!(qrh::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}
