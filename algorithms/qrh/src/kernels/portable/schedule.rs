//! Length-injection schedule.
//!
//! Binds the total message length and each block's byte offset into the
//! state. A running `schema` word carries the schedule from one block to the
//! next.

use super::State;
use crate::kernels::constants::{INJECTION_TAPS, IV, STATE_WORDS};

/// Per-message schedule state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthSchedule {
    schema: u32,
    input_len: u64,
}

impl LengthSchedule {
    /// Start the schedule for a message of `input_len` bytes.
    pub const fn new(input_len: u64) -> Self {
        Self {
            schema: IV[schema_index(input_len)],
            input_len,
        }
    }

    /// Current schema word.
    #[cfg(test)]
    pub const fn schema(&self) -> u32 {
        self.schema
    }

    /// Perturb four state words for the block starting at byte `block_index`.
    ///
    /// The four slots are data dependent and may collide.
    #[allow(clippy::cast_possible_truncation)]
    pub fn inject(&mut self, state: &mut State, block_index: u64) {
        let bit_len = self.input_len.wrapping_mul(8);
        let len_lo = bit_len as u32;
        let len_hi = (bit_len >> 32) as u32;
        let blk = block_index as u32;

        let mut combined = self.schema
            ^ blk.rotate_left(22)
            ^ len_lo.rotate_left(17)
            ^ len_hi.rotate_left(13);

        self.schema ^= combined;
        combined = combined.wrapping_add(self.schema);

        // Only the low nibble of the rotated length survives the mod 16, and
        // it is the same whether the length is rotated as 32 or 64 bits.
        let len_tap = (self.input_len as u32).rotate_left(15);

        for i in 0..INJECTION_TAPS {
            let step = i as u32;
            let tap = IV[(step + 1).wrapping_mul(len_tap) as usize % STATE_WORDS];

            let seed = combined
                ^ self.schema.rotate_left(11)
                ^ position_mix(blk, combined)
                ^ step.wrapping_mul(tap);

            let x = (seed as usize % STATE_WORDS + i) % STATE_WORDS;
            state[x] ^= combined.rotate_left(9);

            self.schema = self.schema.wrapping_add(state[x]);
            self.schema ^= state[x];
            self.schema = self.schema.rotate_left(19);

            combined ^= self.schema;
        }
    }
}

/// Always 0: the shift clears every bit a mod-16 reduction can see. Kept so
/// the schema starts from the same table slot as every published digest.
#[allow(clippy::cast_possible_truncation)]
const fn schema_index(input_len: u64) -> usize {
    ((input_len << 8) % STATE_WORDS as u64) as usize
}

/// Block-position term of the slot seed.
///
/// The two shifted halves are combined with OR after each is XOR-ed into
/// the block index; this is not `rotl(blk ^ combined, 23)`, and digests
/// depend on the exact shape.
const fn position_mix(blk: u32, combined: u32) -> u32 {
    (blk ^ (combined << 23)) | (blk ^ (combined >> 9))
}
