#![cfg_attr(not(feature = "std"), no_std)]

//! # QRH-256
//!
//! Experimental 256-bit ARX hash function with an HMAC construction.
//! No security claim is made: do not use it to protect anything.

//! # Usage
//! ```rust
//! // 1. Hashing
//! let digest = qrh::hash(b"Hello, QRH");
//! assert!(qrh::verify(b"Hello, QRH", &digest));
//!
//! // 2. Keyed Hashing (HMAC)
//! let tag = qrh::hmac(b"secret key", b"message");
//! assert!(qrh::verify_hmac(b"secret key", b"message", &tag));
//!
//! // 3. Incremental Input (buffered in memory)
//! let mut hasher = qrh::Hasher::new();
//! hasher.update(b"Hello, ");
//! hasher.update(b"QRH");
//! assert_eq!(hasher.finalize(), digest);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
mod ffi;
mod hmac;
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use hmac::{hmac, hmac_with_rounds, try_hmac, try_hmac_with_rounds, verify_hmac, HmacQrh};
pub use kernels::constants::{BLOCK_SIZE, HASH_SIZE};
pub use oneshot::{hash, hash_with_rounds, verify};
pub use streaming::QrhHasher as Hasher;
pub use types::{MatrixMix, QrhError, Rounds};
