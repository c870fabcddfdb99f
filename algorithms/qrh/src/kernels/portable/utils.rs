//! Word codec and ARX primitives.
//!
//! Every mixing function takes its words by value and returns them in the
//! same order, so callers can update disjoint state slots with a single
//! destructuring assignment.

use crate::kernels::constants::WORD_SIZE;

// =============================================================================
// WORD CODEC
// =============================================================================

/// Read one little-endian word at `*offset` and advance by 4.
///
/// The caller guarantees 4 readable bytes.
#[inline]
pub fn read_word(buf: &[u8], offset: &mut usize) -> u32 {
    let at = *offset;
    let word = u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]]);
    *offset += WORD_SIZE;
    word
}

/// Read the 1-3 trailing bytes of a block as a zero-extended little-endian
/// word and advance by `count`.
#[inline]
pub fn read_partial(buf: &[u8], offset: &mut usize, count: usize) -> u32 {
    debug_assert!((1..WORD_SIZE).contains(&count), "partial read of {count} bytes");
    let mut bytes = [0u8; WORD_SIZE];
    bytes[..count].copy_from_slice(&buf[*offset..*offset + count]);
    *offset += count;
    u32::from_le_bytes(bytes)
}

/// Write `value` as 4 little-endian bytes at the start of `buf`.
#[inline]
pub fn write_word(buf: &mut [u8], value: u32) {
    buf[..WORD_SIZE].copy_from_slice(&value.to_le_bytes());
}

// =============================================================================
// ARX PRIMITIVES
// =============================================================================

/// Pairwise entangling step of the ring phase.
///
/// Not an involution. The closing cross-XORs each see the partner value
/// already updated earlier in the same call.
#[inline]
pub const fn round2(mut a: u32, mut b: u32) -> (u32, u32) {
    a = a.wrapping_add(b | a);
    b = b.wrapping_add(b | a);

    a = a.wrapping_add(a.rotate_left(13));
    b = b.wrapping_add(b.rotate_left(14));

    b ^= b.rotate_left(15);
    a = a.wrapping_add(a.rotate_left(26));

    a = a.wrapping_add(a.rotate_left(11));
    b = b.wrapping_add(b.rotate_left(10));

    b ^= a.wrapping_add(b).rotate_left(23);
    a ^= b.wrapping_add(a).rotate_left(10);
    (a, b)
}

/// Triangular three-word addition followed by rotate-add feedback.
///
/// Both passes run strictly in `a -> b -> c` order.
#[inline]
pub const fn add3(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    a = a.wrapping_add(c.wrapping_add(b));
    b = b.wrapping_add(a.wrapping_add(c));
    c = c.wrapping_add(a.wrapping_add(b));

    a = a.wrapping_add(c.rotate_left(19));
    b = b.wrapping_add(a.rotate_left(13));
    c = c.wrapping_add(b.rotate_left(8));
    (a, b, c)
}

/// Four-word add/xor/rotate step.
///
/// Steps 3 and 4 overwrite `b` and `d` from their neighbours rather than
/// rotating them in place.
#[inline]
pub const fn round4(mut a: u32, mut b: u32, mut c: u32, mut d: u32) -> (u32, u32, u32, u32) {
    a = a.wrapping_add(b);
    b ^= d;
    b = b.rotate_left(9);
    a = a.rotate_left(6);

    c = c.wrapping_add(d);
    a ^= c;
    d = d.rotate_left(12);
    c = c.rotate_left(13);

    a = a.wrapping_add(b);
    c ^= d;
    b = d.rotate_left(14);
    a = a.rotate_left(25);

    c = c.wrapping_add(d);
    a ^= b;
    d = b.rotate_left(23);
    c = c.rotate_left(30);
    (a, b, c, d)
}

/// Standard matrix-phase mix for one column or diagonal.
#[inline]
pub const fn round_matrix(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let (b, c, a) = add3(b, c, a);
    let (a, c, d) = add3(a, c, d);
    let (a, b, c, d) = round4(a, b, c, d);
    let (b, d, a) = add3(b, d, a);
    let (b, c, d) = add3(b, c, d);
    (a, b, c, d)
}

/// Heavy matrix-phase mix: three `round4` passes over rotated lane orders.
#[inline]
pub const fn round_matrix_heavy(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let (a, b, c, d) = round4(a, b, c, d);

    let (b, c, a) = add3(b, c, a);
    let (a, c, d) = add3(a, c, d);

    let (d, c, b, a) = round4(d, c, b, a);

    let (b, c, a) = add3(b, c, a);
    let (a, c, d) = add3(a, c, d);

    let (c, b, a, d) = round4(c, b, a, d);

    let (b, d, a) = add3(b, d, a);
    let (b, c, d) = add3(b, c, d);
    (a, b, c, d)
}
