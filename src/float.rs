//! # Float-to-Int Conversion on Raw Bit Patterns
//!
//! Truncating conversion from an IEEE-754 single-precision bit pattern to a
//! signed 32-bit integer, done entirely with integer masking, shifting and
//! comparison. No floating-point type or arithmetic appears anywhere in this
//! module; the caller hands over the raw bits.
//!
//! ## Bit Layout (single precision)
//!
//! ```text
//! [sign:1][biased exponent:8][fraction:23]
//!  bit 31  bits 30-23         bits 22-0
//! ```

use crate::error::FloatToIntError;
use crate::{SWord, Word};

// ============================================================================
// Field Constants
// ============================================================================

/// Sign bit: bit 31
pub const SIGN_MASK: Word = 0x8000_0000;

/// Biased exponent field position: bits 30-23
pub const EXP_SHIFT: u32 = 23;

/// Biased exponent mask, applied after shifting (8 bits)
pub const EXP_MASK: Word = 0xFF;

/// Fraction field: bits 22-0
pub const FRAC_MASK: Word = 0x007F_FFFF;

/// The implicit leading 1 of a normalized significand (bit 23)
pub const IMPLICIT_BIT: Word = 0x0080_0000;

/// Exponent bias for single precision
pub const EXP_BIAS: i32 = 127;

/// Out-of-range sentinel returned by [`float_to_int_bits`] for NaN,
/// infinity and overflowing magnitudes: `0x8000_0000`
pub const OUT_OF_RANGE: SWord = SWord::MIN;

// ============================================================================
// Bit-Field Decomposition
// ============================================================================

/// A single-precision bit pattern split into its three fields.
///
/// Transient by design: decomposed fresh from the raw word on every
/// conversion and discarded afterwards, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatBits {
    /// Sign bit (bit 31) was set
    pub negative: bool,
    /// Biased exponent field, 0..=255
    pub biased_exp: Word,
    /// Fraction field, 23 bits
    pub fraction: Word,
}

/// Classification of a decomposed bit pattern by its exponent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatClass {
    /// Exponent and fraction fields both zero; covers -0.0 as well
    Zero,
    /// Exponent field zero, fraction nonzero: magnitude below the smallest
    /// normalized value, no implicit leading 1
    Subnormal,
    /// Exponent field in 1..=254: the implicit leading 1 applies
    Normal,
    /// Exponent field all ones: infinity if the fraction is zero, NaN
    /// otherwise
    NanOrInfinity,
}

impl FloatBits {
    /// Split a raw single-precision bit pattern into its fields.
    #[inline]
    pub fn decompose(bits: Word) -> Self {
        Self {
            negative: bits & SIGN_MASK != 0,
            biased_exp: (bits >> EXP_SHIFT) & EXP_MASK,
            fraction: bits & FRAC_MASK,
        }
    }

    /// Classify the pattern.
    #[inline]
    pub fn classify(&self) -> FloatClass {
        match self.biased_exp {
            0 if self.fraction == 0 => FloatClass::Zero,
            0 => FloatClass::Subnormal,
            255 => FloatClass::NanOrInfinity,
            _ => FloatClass::Normal,
        }
    }

    /// Unbiased exponent. Only meaningful for normalized patterns.
    #[inline]
    pub fn exponent(&self) -> i32 {
        self.biased_exp as i32 - EXP_BIAS
    }

    /// The 24-bit significand with the implicit leading 1 restored. Only
    /// meaningful for normalized patterns.
    #[inline]
    pub fn significand(&self) -> Word {
        self.fraction | IMPLICIT_BIT
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Truncating float-to-int conversion on a raw bit pattern, with the failure
/// cases reported as errors.
///
/// Matches the native `(int)f` truncation toward zero for every finite input
/// whose magnitude is below 2^31. NaN, the infinities and overflowing
/// magnitudes come back as [`FloatToIntError`] instead of a sentinel value,
/// so callers can always tell an out-of-range input apart from a legitimate
/// result. A successful conversion never yields [`OUT_OF_RANGE`]: the bit
/// pattern of -2^31 itself routes through the overflow branch, matching the
/// sentinel contract of [`float_to_int_bits`].
pub fn try_float_to_int(bits: Word) -> Result<SWord, FloatToIntError> {
    let fields = FloatBits::decompose(bits);
    match fields.classify() {
        // +-0 and every subnormal sit below 1 in magnitude
        FloatClass::Zero | FloatClass::Subnormal => Ok(0),
        FloatClass::NanOrInfinity => {
            if fields.fraction != 0 {
                Err(FloatToIntError::NotANumber)
            } else {
                Err(FloatToIntError::Infinite {
                    negative: fields.negative,
                })
            }
        }
        FloatClass::Normal => {
            let e = fields.exponent();
            if e < 0 {
                // magnitude in (0, 1), truncates to zero
                return Ok(0);
            }
            if e >= 31 {
                return Err(FloatToIntError::Overflow {
                    negative: fields.negative,
                });
            }
            let magnitude = if e > 23 {
                // binary point sits past the 24 significand bits
                fields.significand() << (e - 23) as u32
            } else {
                // dropping the fractional bits is the toward-zero truncation
                fields.significand() >> (23 - e) as u32
            };
            if fields.negative {
                Ok((!magnitude).wrapping_add(1) as SWord)
            } else if magnitude & SIGN_MASK != 0 {
                // e <= 30 already bounds the magnitude below 2^31; final
                // guard on the sign bit of the result
                Err(FloatToIntError::Overflow { negative: false })
            } else {
                Ok(magnitude as SWord)
            }
        }
    }
}

/// Truncating float-to-int conversion with the classic sentinel contract:
/// NaN, infinity and overflowing magnitudes all come back as
/// [`OUT_OF_RANGE`] (`0x8000_0000`).
///
/// The sentinel is deliberately ambiguous with the minimum 32-bit integer.
/// Callers must treat it purely as an out-of-range indicator; use
/// [`try_float_to_int`] when the cases need to be told apart.
#[inline]
pub fn float_to_int_bits(bits: Word) -> SWord {
    try_float_to_int(bits).unwrap_or(OUT_OF_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_fields() {
        // 1.0f: sign 0, biased exponent 127, fraction 0
        let fields = FloatBits::decompose(0x3F80_0000);
        assert!(!fields.negative);
        assert_eq!(fields.biased_exp, 127);
        assert_eq!(fields.fraction, 0);
        assert_eq!(fields.exponent(), 0);
        assert_eq!(fields.significand(), IMPLICIT_BIT);

        // -1.5f: sign 1, biased exponent 127, fraction 0x400000
        let fields = FloatBits::decompose(0xBFC0_0000);
        assert!(fields.negative);
        assert_eq!(fields.biased_exp, 127);
        assert_eq!(fields.fraction, 0x40_0000);
    }

    #[test]
    fn test_classify() {
        assert_eq!(FloatBits::decompose(0).classify(), FloatClass::Zero);
        assert_eq!(
            FloatBits::decompose(0x8000_0000).classify(),
            FloatClass::Zero
        );
        assert_eq!(
            FloatBits::decompose(0x0000_0001).classify(),
            FloatClass::Subnormal
        );
        assert_eq!(
            FloatBits::decompose(0x007F_FFFF).classify(),
            FloatClass::Subnormal
        );
        assert_eq!(
            FloatBits::decompose(0x3F80_0000).classify(),
            FloatClass::Normal
        );
        assert_eq!(
            FloatBits::decompose(0x7F80_0000).classify(),
            FloatClass::NanOrInfinity
        );
        assert_eq!(
            FloatBits::decompose(0x7FC0_0000).classify(),
            FloatClass::NanOrInfinity
        );
    }

    #[test]
    fn test_zero_and_subnormal_truncate_to_zero() {
        assert_eq!(float_to_int_bits(0), 0);
        // -0.0
        assert_eq!(float_to_int_bits(0x8000_0000), 0);
        // smallest positive subnormal
        assert_eq!(float_to_int_bits(0x0000_0001), 0);
        // largest negative subnormal magnitude
        assert_eq!(float_to_int_bits(0x807F_FFFF), 0);
    }

    #[test]
    fn test_small_magnitudes_truncate_to_zero() {
        // 0.5f and -0.999...f have negative unbiased exponents
        assert_eq!(float_to_int_bits(0x3F00_0000), 0);
        assert_eq!(try_float_to_int(0xBF7F_FFFF), Ok(0));
    }

    #[test]
    fn test_exact_small_values() {
        // 1.0f
        assert_eq!(float_to_int_bits(0x3F80_0000), 1);
        // -1.5f truncates toward zero, not down
        assert_eq!(float_to_int_bits(0xBFC0_0000), -1);
        // 2.0f
        assert_eq!(float_to_int_bits(0x4000_0000), 2);
        // -2.5f
        assert_eq!(float_to_int_bits(0xC020_0000), -2);
        // 2^23 lands exactly on the significand width
        assert_eq!(float_to_int_bits(0x4B00_0000), 1 << 23);
    }

    #[test]
    fn test_large_magnitudes() {
        // 2^30: significand shifted left past the fraction width
        assert_eq!(float_to_int_bits(0x4E80_0000), 1 << 30);
        // -2^30
        assert_eq!(float_to_int_bits(0xCE80_0000), -(1 << 30));
        // largest float below 2^31: (2^24 - 1) << 7
        assert_eq!(float_to_int_bits(0x4EFF_FFFF), 0x7FFF_FF80);
    }

    #[test]
    fn test_nan_and_infinity_are_errors() {
        assert_eq!(
            try_float_to_int(0x7F80_0000),
            Err(FloatToIntError::Infinite { negative: false })
        );
        assert_eq!(
            try_float_to_int(0xFF80_0000),
            Err(FloatToIntError::Infinite { negative: true })
        );
        assert_eq!(try_float_to_int(0x7FC0_0000), Err(FloatToIntError::NotANumber));
        assert_eq!(try_float_to_int(0xFFFF_FFFF), Err(FloatToIntError::NotANumber));

        assert_eq!(float_to_int_bits(0x7F80_0000), OUT_OF_RANGE);
        assert_eq!(float_to_int_bits(0x7FC0_0000), OUT_OF_RANGE);
    }

    #[test]
    fn test_overflow_is_an_error() {
        // 2^31
        assert_eq!(
            try_float_to_int(0x4F00_0000),
            Err(FloatToIntError::Overflow { negative: false })
        );
        // -2^31: representable as i32, still reported as overflow; the
        // sentinel happens to coincide with the exact answer
        assert_eq!(
            try_float_to_int(0xCF00_0000),
            Err(FloatToIntError::Overflow { negative: true })
        );
        assert_eq!(float_to_int_bits(0xCF00_0000), SWord::MIN);
        // 2^127, far out of range
        assert_eq!(float_to_int_bits(0x7F00_0000), OUT_OF_RANGE);
    }
}
