//! C-API Bindings
//!
//! Exposes QRH-256 to C/C++ via FFI with pointer safety and panic boundaries.
//! Digests are written into caller-owned 32-byte buffers; nothing returned
//! across the boundary needs to be freed.

#![allow(unsafe_code)]

use crate::hmac;
use crate::kernels::constants::HASH_SIZE;
use crate::oneshot;

use std::slice;

// =============================================================================
// STATUS CODES
// =============================================================================

const QRH_OK: i32 = 0;
const QRH_ERR_NULL: i32 = -1;
const QRH_ERR_PANIC: i32 = -2;
const QRH_ERR_ALLOC: i32 = -3;

/// Borrow `len` bytes at `ptr`; a null pointer is only valid when `len == 0`.
///
/// # Safety
/// Non-null `ptr` must be valid for `len` bytes for the returned lifetime.
unsafe fn bytes<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return (len == 0).then_some(&[]);
    }
    Some(slice::from_raw_parts(ptr, len))
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute the QRH-256 digest.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for 32 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn qrh_256(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    if output_ptr.is_null() {
        return QRH_ERR_NULL;
    }
    let Some(input) = bytes(input_ptr, input_len) else {
        return QRH_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let hash = oneshot::hash(input);
        std::ptr::copy_nonoverlapping(hash.as_ptr(), output_ptr, HASH_SIZE);
    });

    match result {
        Ok(()) => QRH_OK,
        Err(_) => QRH_ERR_PANIC,
    }
}

/// Compute HMAC-QRH-256.
///
/// # Safety
/// - `key_ptr` must be valid for `key_len` bytes (may be null if `key_len == 0`)
/// - `msg_ptr` must be valid for `msg_len` bytes (may be null if `msg_len == 0`)
/// - `output_ptr` must be valid for 32 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
/// - `-3`: Allocation failure
#[no_mangle]
pub unsafe extern "C" fn qrh_256_hmac(
    key_ptr: *const u8,
    key_len: usize,
    msg_ptr: *const u8,
    msg_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    if output_ptr.is_null() {
        return QRH_ERR_NULL;
    }
    let (Some(key), Some(message)) = (bytes(key_ptr, key_len), bytes(msg_ptr, msg_len)) else {
        return QRH_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        hmac::try_hmac(key, message).map(|tag| {
            std::ptr::copy_nonoverlapping(tag.as_ptr(), output_ptr, HASH_SIZE);
        })
    });

    match result {
        Ok(Ok(())) => QRH_OK,
        Ok(Err(_)) => QRH_ERR_ALLOC,
        Err(_) => QRH_ERR_PANIC,
    }
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify data matches an expected digest in constant time.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `hash_ptr` must point to exactly 32 bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn qrh_256_verify(
    input_ptr: *const u8,
    input_len: usize,
    hash_ptr: *const u8,
) -> i32 {
    if hash_ptr.is_null() {
        return QRH_ERR_NULL;
    }
    let Some(input) = bytes(input_ptr, input_len) else {
        return QRH_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let mut expected = [0u8; HASH_SIZE];
        expected.copy_from_slice(slice::from_raw_parts(hash_ptr, HASH_SIZE));
        oneshot::verify(input, &expected)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => QRH_ERR_PANIC,
    }
}

/// Verify an HMAC tag in constant time.
///
/// # Safety
/// - `key_ptr` must be valid for `key_len` bytes (may be null if `key_len == 0`)
/// - `msg_ptr` must be valid for `msg_len` bytes (may be null if `msg_len == 0`)
/// - `tag_ptr` must point to exactly 32 bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn qrh_256_hmac_verify(
    key_ptr: *const u8,
    key_len: usize,
    msg_ptr: *const u8,
    msg_len: usize,
    tag_ptr: *const u8,
) -> i32 {
    if tag_ptr.is_null() {
        return QRH_ERR_NULL;
    }
    let (Some(key), Some(message)) = (bytes(key_ptr, key_len), bytes(msg_ptr, msg_len)) else {
        return QRH_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let mut expected = [0u8; HASH_SIZE];
        expected.copy_from_slice(slice::from_raw_parts(tag_ptr, HASH_SIZE));
        hmac::verify_hmac(key, message, &expected)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => QRH_ERR_PANIC,
    }
}
