use bolero::check;
use qrh::{hash, verify};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let h = hash(data);
        assert!(verify(data, &h), "verify() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Length Extension by a Zero Byte
        let mut extended = data.clone();
        extended.push(0);
        assert!(!verify(&extended, &h), "verify() ignored a trailing zero");

        // 2. Hash Corruption
        let mut bad_h = h;
        bad_h[0] ^= 0xFF;

        assert!(
            !verify(data, &bad_h),
            "verify() succeeded on corrupted hash"
        );
    });
}
