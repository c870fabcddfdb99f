//! QRH Kernel Constants
//!
//! The initialization table is the SHA-256 initial value followed by the
//! SHA-224 initial value. Nothing about the construction depends on that
//! choice; it is not a security claim.
//!
//! The same table has two consumers:
//!   - the initial 16-word state of every compression
//!   - the multiplier taps of the length-injection schedule

// =============================================================================
// SIZES
// =============================================================================

/// Hash output size in bytes (256-bit digest).
pub const HASH_SIZE: usize = 32;

/// Bytes absorbed per block; also the HMAC block size.
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the internal state.
pub const STATE_WORDS: usize = 16;

/// Size of a single state word in bytes.
pub const WORD_SIZE: usize = 4;

/// Number of state words serialized into the digest.
pub const OUTPUT_WORDS: usize = HASH_SIZE / WORD_SIZE;

// =============================================================================
// ROUNDS
// =============================================================================

/// Ring-phase repetitions per block.
pub const HALF_ROUNDS: usize = 4;

/// Matrix-phase repetitions per block. These are by far the heaviest rounds.
pub const MATRIX_ROUNDS: usize = 2;

/// Diffusion passes per block.
pub const DIFFUSIONS: usize = 4;

/// State words perturbed by the length schedule per block.
pub const INJECTION_TAPS: usize = 4;

// =============================================================================
// INITIALIZATION TABLE
// =============================================================================

/// Initial state and length-schedule multiplier table.
#[rustfmt::skip]
pub const IV: [u32; STATE_WORDS] = [
    0x6A09_E667, 0xBB67_AE85, 0x3C6E_F372, 0xA54F_F53A,
    0x510E_527F, 0x9B05_688C, 0x1F83_D9AB, 0x5BE0_CD19,
    0xC105_9ED8, 0x367C_D507, 0x3070_DD17, 0xF70E_5939,
    0xFFC0_0B31, 0x6858_1511, 0x64F9_8FA7, 0xBEFA_4FA4,
];

// =============================================================================
// PERMUTATION TOPOLOGY
// =============================================================================

/// Four interleaved rings; each word is paired with the word five ahead in
/// its row of four.
#[rustfmt::skip]
pub const RING_PAIRS: [(usize, usize); STATE_WORDS] = [
    (0, 5),  (1, 6),  (2, 7),   (3, 4),
    (4, 9),  (5, 10), (6, 11),  (7, 8),
    (8, 13), (9, 14), (10, 15), (11, 12),
    (12, 1), (13, 2), (14, 3),  (15, 0),
];

/// Column lanes of the 4x4 state matrix.
pub const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]];

/// Diagonal lanes of the 4x4 state matrix.
pub const DIAGONALS: [[usize; 4]; 4] = [[0, 5, 10, 15], [1, 6, 11, 12], [2, 7, 8, 13], [3, 4, 9, 14]];

// =============================================================================
// HMAC
// =============================================================================

/// Inner padding byte.
pub const IPAD: u8 = 0x36;

/// Outer padding byte.
pub const OPAD: u8 = 0x5c;
