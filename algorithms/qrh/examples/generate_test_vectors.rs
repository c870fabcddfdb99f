//! Generator for QRH-256 test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Symbolic inputs (`EXACT_64_ZERO`, `SEQUENCE_70`, ...) are expanded by the
//! vector test; every other input is literal ASCII.
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]
use serde_json::{json, Value};

fn vector(name: &str, input: &str, bytes: &[u8]) -> Value {
    json!({
        "name": name,
        "input": input,
        "hash": hex::encode(qrh::hash(bytes))
    })
}

fn hmac_vector(name: &str, key: &[u8], message: &[u8]) -> Value {
    json!({
        "name": name,
        "key": hex::encode(key),
        "message": hex::encode(message),
        "tag": hex::encode(qrh::hmac(key, message))
    })
}

fn sequence(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

fn main() {
    // =========================================================================
    // 1. BASIC VECTORS
    // =========================================================================

    let mut vectors = vec![
        vector("EMPTY", "", b""),
        vector("SINGLE_A", "a", b"a"),
        vector("ABC", "abc", b"abc"),
        vector("A_NUL", "A_NUL", b"a\0"),
        vector(
            "FOX",
            "The quick brown fox jumps over the lazy dog",
            b"The quick brown fox jumps over the lazy dog",
        ),
    ];

    // =========================================================================
    // 2. BOUNDARY CONDITIONS
    // =========================================================================

    vectors.push(vector("ONE_ZERO", "ONE_ZERO", &[0u8; 1]));
    vectors.push(vector("UNALIGNED_63_ZERO", "UNALIGNED_63_ZERO", &[0u8; 63]));
    vectors.push(vector("EXACT_64_ZERO", "EXACT_64_ZERO", &[0u8; 64]));
    vectors.push(vector("OVERFLOW_65_ZERO", "OVERFLOW_65_ZERO", &[0u8; 65]));
    vectors.push(vector("EXACT_128_ZERO", "EXACT_128_ZERO", &[0u8; 128]));
    vectors.push(vector("UNALIGNED_63_TWO", "UNALIGNED_63_TWO", &[2u8; 63]));

    // =========================================================================
    // 3. MULTI-BLOCK INPUTS
    // =========================================================================

    vectors.push(vector("SHORT_100_A", "SHORT_100_A", &[b'A'; 100]));
    vectors.push(vector("MEDIUM_256_A", "MEDIUM_256_A", &[b'A'; 256]));
    vectors.push(vector("LARGE_1KB", "LARGE_1KB", &[b'A'; 1024]));
    // Short tails over a previous full block exercise the reused block buffer.
    vectors.push(vector("SEQUENCE_70", "SEQUENCE_70", &sequence(70)));
    vectors.push(vector("SEQUENCE_200", "SEQUENCE_200", &sequence(200)));
    vectors.push(vector("SEQUENCE_1000", "SEQUENCE_1000", &sequence(1000)));

    // =========================================================================
    // 4. HMAC
    // =========================================================================

    let hmac_vectors = vec![
        hmac_vector("FOX_KEY", b"key", b"The quick brown fox"),
        hmac_vector("EMPTY_EMPTY", b"", b""),
    ];

    let output = json!({
        "algorithm": "QRH-256",
        "vectors": vectors,
        "hmac_vectors": hmac_vectors,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
