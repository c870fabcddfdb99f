//! Permutation engine.
//!
//! Three phases per block, always in this order:
//! 1. ring phase: `round2` over four interleaved rings
//! 2. matrix phase: quadruple mix over columns, then diagonals
//! 3. diffusion: in-place linear feedback across the whole state

use super::utils::{round2, round_matrix, round_matrix_heavy};
use super::State;
use crate::kernels::constants::{COLUMNS, DIAGONALS, RING_PAIRS, STATE_WORDS};
use crate::types::{MatrixMix, Rounds};

/// Run all three phases over `state`.
pub fn permute(state: &mut State, rounds: &Rounds) {
    for _ in 0..rounds.half_rounds {
        ring_round(state);
    }

    for _ in 0..rounds.matrix_rounds {
        matrix_round(state, rounds.matrix);
    }

    for _ in 0..rounds.diffusions {
        diffuse(state);
    }
}

fn ring_round(state: &mut State) {
    for &(i, j) in &RING_PAIRS {
        (state[i], state[j]) = round2(state[i], state[j]);
    }
}

fn matrix_round(state: &mut State, mix: MatrixMix) {
    let mix = match mix {
        MatrixMix::Standard => round_matrix,
        MatrixMix::Heavy => round_matrix_heavy,
    };

    for &[a, b, c, d] in COLUMNS.iter().chain(&DIAGONALS) {
        (state[a], state[b], state[c], state[d]) = mix(state[a], state[b], state[c], state[d]);
    }
}

/// Sequential pass: word `i` sees the already-updated words `0..i`.
fn diffuse(state: &mut State) {
    for i in 0..STATE_WORDS {
        state[i] ^= state[(i + 7) % STATE_WORDS].rotate_left(11);
        state[i] = state[i].wrapping_add(state[(i + 3) % STATE_WORDS].rotate_left(17));
    }
}
