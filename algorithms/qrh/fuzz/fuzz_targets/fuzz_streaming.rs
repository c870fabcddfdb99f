#![no_main]

use libfuzzer_sys::fuzz_target;
use qrh::Hasher;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let reference_hash = qrh::hash(data);

    // Chunk size is derived from the first byte (1 to 255)
    let chunk_size = (data[0] as usize % 255) + 1;

    let mut hasher = Hasher::new();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }
    assert_eq!(hasher.len(), data.len());

    assert_eq!(
        reference_hash,
        hasher.finalize(),
        "Incremental and one-shot approaches differ!"
    );
});
