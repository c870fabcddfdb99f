#![no_main]

use libfuzzer_sys::fuzz_target;
use qrh::{hmac, try_hmac, verify_hmac, HmacQrh};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First byte selects the key length, so keys on both sides of the
    // 64-byte block boundary get exercised.
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let key_len = (selector as usize).min(rest.len());
    let (key, msg) = rest.split_at(key_len);

    // =============================================================================
    // 1. FRONT-END AGREEMENT
    // =============================================================================

    let tag = hmac(key, msg);

    if let Ok(fallible) = try_hmac(key, msg) {
        assert_eq!(tag, fallible, "try_hmac disagrees with hmac");
    }

    let mut mac = HmacQrh::new(key);
    for chunk in msg.chunks(17) {
        mac.update(chunk);
    }
    assert_eq!(mac.finalize(), tag, "HmacQrh disagrees with hmac");

    // =============================================================================
    // 2. VERIFICATION
    // =============================================================================

    assert!(verify_hmac(key, msg, &tag), "HMAC verification failed");

    let mut bad_tag = tag;
    bad_tag[0] ^= 0xFF;
    assert!(
        !verify_hmac(key, msg, &bad_tag),
        "HMAC verification succeeded with corrupted tag"
    );
});
