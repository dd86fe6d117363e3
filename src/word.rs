//! # Integer Bit Twiddling on 32-Bit Words
//!
//! Standalone routines that rebuild familiar integer operations from a
//! narrower set of primitives: exclusive-or from AND and complement, a
//! logical right shift from the arithmetic one, boolean negation without a
//! comparison. Each routine is independent of the others; all are total over
//! their documented domains and branch-free.

use crate::SWord;

/// Exclusive-or built from complement and AND.
///
/// `!(x & y)` is false only where both bits are set; `!(!x & !y)` is false
/// only where both bits are clear. Their intersection is exactly the set of
/// positions where the inputs disagree.
#[inline]
pub fn bit_xor(x: SWord, y: SWord) -> SWord {
    let not_both = !(x & y);
    let not_neither = !(!x & !y);
    not_both & not_neither
}

/// Returns the word 1 if every even-indexed bit of `x` (bits 0, 2, ..., 30)
/// is set, else 0.
///
/// Parallel reduction: each AND-with-shift step halves the distance between
/// the bit groups still being intersected, so after folding by 16, 8, 4 and 2
/// bit 0 holds the AND of all sixteen even positions.
#[inline]
pub fn all_even_bits(x: SWord) -> SWord {
    let mut folded = x & (x >> 16);
    folded &= folded >> 8;
    folded &= folded >> 4;
    folded &= folded >> 2;
    folded & 1
}

/// Logical (zero-fill) right shift of `x` by `n`, built from the arithmetic
/// shift.
///
/// The arithmetic shift replicates the sign bit into the `n` vacated
/// positions; `((x & SIGN) >> n) << 1` reconstructs exactly those replicated
/// bits, and the XOR clears them.
///
/// Precondition: `n <= 31`. Debug-asserted; unspecified in release builds.
#[inline]
pub fn logical_shift(x: SWord, n: u32) -> SWord {
    debug_assert!(n <= 31, "shift amount {n} out of range 0..=31");
    let sign_fill = ((x & SWord::MIN) >> n) << 1;
    (x >> n) ^ sign_fill
}

/// Returns the word 1 if `x == 0`, else 0, without a comparison.
///
/// For any nonzero x at least one of x and -x has the sign bit set (the
/// negation is wrapping, which covers `i32::MIN`). Arithmetic-shifting the
/// OR of the two right by 31 smears that bit into -1, and adding 1 lands on
/// 0; only zero itself comes out as 1.
#[inline]
pub fn logical_neg(x: SWord) -> SWord {
    ((x | x.wrapping_neg()) >> 31) + 1
}

/// The maximum two's-complement 32-bit integer, `0x7FFF_FFFF`: the
/// complement of 1 shifted into the sign position.
#[inline]
pub fn tmax() -> SWord {
    !(1 << 31)
}

/// Returns the word 1 if `x` is exactly representable as an `n`-bit
/// two's-complement integer, else 0.
///
/// Round trip: drop the upper `32 - n` bits with a left shift, then
/// sign-extend from the new top bit with the arithmetic shift back. The
/// value fits iff the round trip loses nothing.
///
/// Precondition: `1 <= n <= 32`. Debug-asserted; unspecified in release
/// builds.
#[inline]
pub fn fits_in_bits(x: SWord, n: u32) -> SWord {
    debug_assert!((1..=32).contains(&n), "bit width {n} out of range 1..=32");
    let shift = 32 - n;
    let round_trip = (x << shift) >> shift;
    (round_trip == x) as SWord
}
