//! Portable implementation of QRH-256.
//!
//! Scalar 32-bit ARX only; no platform intrinsics.

use self::permute::permute;
use self::schedule::LengthSchedule;
use self::utils::{read_partial, read_word, write_word};
use crate::kernels::constants::{
    BLOCK_SIZE, HASH_SIZE, IV, OUTPUT_WORDS, STATE_WORDS, WORD_SIZE,
};
use crate::types::Rounds;

mod permute;
mod schedule;
mod utils;

// =============================================================================
// STATE & TYPES
// =============================================================================

/// Internal 16-word state, arithmetic mod 2^32.
pub type State = [u32; STATE_WORDS];

// =============================================================================
// LOGIC
// =============================================================================

/// Absorb `input` and return the final state, length fold included.
pub fn compress(input: &[u8], rounds: &Rounds) -> State {
    let input_len = input.len();
    let mut state = IV;
    let mut schedule = LengthSchedule::new(input_len as u64);

    // Reused across blocks and never cleared: a short final block mixes in the
    // stale tail of the block before it. Every digest depends on that, so it
    // must be kept by anything that claims QRH-256 compatibility.
    let mut block = [0u32; STATE_WORDS];

    let mut offset = 0;
    while offset < input_len {
        let next = stage_block(input, offset, &mut block);

        absorb(&mut state, &block);
        schedule.inject(&mut state, offset as u64);
        permute(&mut state, rounds);

        offset = next;
    }

    fold_length(&mut state, input_len as u64);
    state
}

/// Decode up to 64 bytes at `offset` into the front of `block` and return
/// the offset just past them. Slots past the decoded words are left alone.
fn stage_block(input: &[u8], offset: usize, block: &mut State) -> usize {
    let block_size = (input.len() - offset).min(BLOCK_SIZE);
    let full_words = block_size / WORD_SIZE;
    let partial = block_size % WORD_SIZE;

    let mut cursor = offset;
    for word in &mut block[..full_words] {
        *word = read_word(input, &mut cursor);
    }
    if partial != 0 {
        block[full_words] = read_partial(input, &mut cursor, partial);
    }
    cursor
}

/// XOR one staged block into the state.
#[allow(clippy::cast_possible_truncation)]
fn absorb(state: &mut State, block: &State) {
    for (i, word) in state.iter_mut().enumerate() {
        *word ^= block[i].wrapping_add(block[(i + 1) % STATE_WORDS].rotate_left(i as u32));
    }
}

/// Fold the total length into words 0, 4, 8 and 12.
///
/// The shift and the rotate-by-6 both run on the 64-bit length before the
/// result is truncated to a word.
#[allow(clippy::cast_possible_truncation)]
fn fold_length(state: &mut State, input_len: u64) {
    for i in (0..STATE_WORDS).step_by(4) {
        let shifted = input_len << (((i * 5 + 7) % 16) + 10);
        state[i] ^= ((shifted << 6) | (shifted >> 26)) as u32;
    }
}

/// Serialize words 0..8 little-endian. Words 8..16 are dropped.
fn finalize(state: &State, out: &mut [u8; HASH_SIZE]) {
    for (chunk, word) in out
        .chunks_exact_mut(WORD_SIZE)
        .zip(&state[..OUTPUT_WORDS])
    {
        write_word(chunk, *word);
    }
}

// =============================================================================
// PUBLIC ENTRY POINT
// =============================================================================

/// Portable QRH kernel: compress then finalize.
#[must_use]
pub fn oneshot(input: &[u8], rounds: &Rounds) -> [u8; HASH_SIZE] {
    let state = compress(input, rounds);
    let mut out = [0u8; HASH_SIZE];
    finalize(&state, &mut out);
    out
}
