use bolero::check;
use qrh::{hmac, try_hmac, verify_hmac, HmacQrh};

#[test]
fn fuzz_hmac_front_ends() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(key, message)| {
            let expected = hmac(key, message);

            // =============================================================================
            // FALLIBLE PATH
            // =============================================================================
            if let Ok(tag) = try_hmac(key, message) {
                assert_eq!(tag, expected, "try_hmac mismatch");
            }

            // =============================================================================
            // ACCUMULATING PATH
            // =============================================================================
            let mut mac = HmacQrh::new(key);
            let (first, second) = message.split_at(message.len() / 2);
            mac.update(first);
            mac.update(second);
            assert_eq!(mac.finalize(), expected, "HmacQrh mismatch");

            assert!(verify_hmac(key, message, &expected));
        });
}
