//! HMAC-QRH-256
//!
//! Classical HMAC over QRH-256: 64-byte block, 32-byte tag.
//! Keys longer than a block are hashed first; shorter keys are zero-padded.

use crate::kernels::constants::{BLOCK_SIZE, HASH_SIZE, IPAD, OPAD};
use crate::oneshot::hash_with_rounds;
use crate::types::{QrhError, Rounds};
use subtle::ConstantTimeEq;

#[cfg(feature = "digest-trait")]
use crypto_common::{InvalidLength, Key, KeySizeUser};
#[cfg(feature = "digest-trait")]
use digest::typenum::{U32, U64};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, KeyInit, MacMarker, OutputSizeUser, Reset, Update};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// ONE-SHOT MAC
// =============================================================================

/// Compute HMAC-QRH-256 of `message` under `key`.
///
/// Any key length is accepted, including empty.
///
/// # Example
/// ```rust
/// let tag = qrh::hmac(b"key", b"The quick brown fox");
/// assert!(qrh::verify_hmac(b"key", b"The quick brown fox", &tag));
/// ```
#[must_use]
pub fn hmac(key: &[u8], message: &[u8]) -> [u8; HASH_SIZE] {
    hmac_with_rounds(key, message, &Rounds::STANDARD)
}

/// HMAC over a custom round configuration.
#[must_use]
pub fn hmac_with_rounds(key: &[u8], message: &[u8], rounds: &Rounds) -> [u8; HASH_SIZE] {
    let inner = Vec::with_capacity(BLOCK_SIZE + message.len());
    mac_into(inner, key, message, rounds)
}

/// Compute HMAC-QRH-256, reporting allocation failure instead of aborting.
///
/// # Errors
/// Returns [`QrhError::Allocation`] if the `64 + message.len()` byte inner
/// buffer cannot be reserved.
pub fn try_hmac(key: &[u8], message: &[u8]) -> Result<[u8; HASH_SIZE], QrhError> {
    try_hmac_with_rounds(key, message, &Rounds::STANDARD)
}

/// Fallible HMAC over a custom round configuration.
///
/// # Errors
/// Returns [`QrhError::Allocation`] if the inner buffer cannot be reserved.
pub fn try_hmac_with_rounds(
    key: &[u8],
    message: &[u8],
    rounds: &Rounds,
) -> Result<[u8; HASH_SIZE], QrhError> {
    let requested = BLOCK_SIZE.saturating_add(message.len());
    let mut inner = Vec::new();
    inner
        .try_reserve_exact(requested)
        .map_err(|_| QrhError::allocation(requested))?;
    Ok(mac_into(inner, key, message, rounds))
}

/// Verify a tag in constant time.
#[must_use]
pub fn verify_hmac(key: &[u8], message: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hmac(key, message);
    computed.ct_eq(expected).into()
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Normalize `key` to exactly one block.
fn key_block(key: &[u8], rounds: &Rounds) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    if key.len() > BLOCK_SIZE {
        block[..HASH_SIZE].copy_from_slice(&hash_with_rounds(key, rounds));
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    block
}

fn pad(key_block: &[u8; BLOCK_SIZE], byte: u8) -> [u8; BLOCK_SIZE] {
    key_block.map(|b| b ^ byte)
}

/// `hash(out_pad || inner_hash)`; the outer message is always 96 bytes.
fn outer_hash(
    key_block: &[u8; BLOCK_SIZE],
    inner_hash: &[u8; HASH_SIZE],
    rounds: &Rounds,
) -> [u8; HASH_SIZE] {
    let mut outer = [0u8; BLOCK_SIZE + HASH_SIZE];
    outer[..BLOCK_SIZE].copy_from_slice(&pad(key_block, OPAD));
    outer[BLOCK_SIZE..].copy_from_slice(inner_hash);
    hash_with_rounds(&outer, rounds)
}

/// Full MAC using `inner` (empty, pre-reserved) for `in_pad || message`.
fn mac_into(mut inner: Vec<u8>, key: &[u8], message: &[u8], rounds: &Rounds) -> [u8; HASH_SIZE] {
    let key_block = key_block(key, rounds);
    inner.extend_from_slice(&pad(&key_block, IPAD));
    inner.extend_from_slice(message);

    let inner_hash = hash_with_rounds(&inner, rounds);
    outer_hash(&key_block, &inner_hash, rounds)
}

// =============================================================================
// ACCUMULATING MAC
// =============================================================================

/// Keyed HMAC-QRH-256 that collects the message across `update` calls.
///
/// The length schedule needs the full message length before the first
/// block, so the inner message is buffered and hashed on `finalize`.
///
/// # Example
/// ```rust
/// use qrh::HmacQrh;
///
/// let mut mac = HmacQrh::new(b"key");
/// mac.update(b"The quick ");
/// mac.update(b"brown fox");
/// assert_eq!(mac.finalize(), qrh::hmac(b"key", b"The quick brown fox"));
/// ```
#[derive(Clone)]
pub struct HmacQrh {
    key_block: [u8; BLOCK_SIZE],
    /// `in_pad || message so far`
    inner: Vec<u8>,
    rounds: Rounds,
}

impl HmacQrh {
    /// Create a MAC keyed with `key` (any length).
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        Self::with_rounds(key, Rounds::STANDARD)
    }

    /// Create a MAC over a custom round configuration.
    #[must_use]
    pub fn with_rounds(key: &[u8], rounds: Rounds) -> Self {
        let key_block = key_block(key, &rounds);
        let mut inner = Vec::with_capacity(BLOCK_SIZE * 2);
        inner.extend_from_slice(&pad(&key_block, IPAD));
        Self {
            key_block,
            inner,
            rounds,
        }
    }

    /// Append message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.extend_from_slice(data);
    }

    /// Produce the tag.
    #[must_use]
    pub fn finalize(self) -> [u8; HASH_SIZE] {
        self.tag()
    }

    /// Compare the tag against `expected` in constant time.
    #[must_use]
    pub fn verify(self, expected: &[u8; HASH_SIZE]) -> bool {
        self.tag().ct_eq(expected).into()
    }

    /// Drop the buffered message, keeping the key.
    pub fn reset(&mut self) {
        self.inner.truncate(BLOCK_SIZE);
    }

    fn tag(&self) -> [u8; HASH_SIZE] {
        let inner_hash = hash_with_rounds(&self.inner, &self.rounds);
        outer_hash(&self.key_block, &inner_hash, &self.rounds)
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for HmacQrh {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for HmacQrh {
    type KeySize = U64;
}

#[cfg(feature = "digest-trait")]
impl KeyInit for HmacQrh {
    fn new(key: &Key<Self>) -> Self {
        Self::new(key.as_slice())
    }

    /// Any key length is accepted, as with [`HmacQrh::new`].
    fn new_from_slice(key: &[u8]) -> Result<Self, InvalidLength> {
        Ok(Self::new(key))
    }
}

#[cfg(feature = "digest-trait")]
impl Update for HmacQrh {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for HmacQrh {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for HmacQrh {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.tag());
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for HmacQrh {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl MacMarker for HmacQrh {}
