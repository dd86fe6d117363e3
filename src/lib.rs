//! # bitword
//!
//! Bit-level reimplementations of integer and floating-point primitives on
//! 32-bit two's-complement words.
//!
//! ## Routines
//! - [`bit_xor`] — exclusive-or from complement and AND
//! - [`all_even_bits`] — whether every even-indexed bit is set
//! - [`logical_shift`] — zero-fill right shift from the arithmetic shift
//! - [`logical_neg`] — the boolean-not operator without comparisons
//! - [`tmax`] — the maximum two's-complement integer
//! - [`fits_in_bits`] — n-bit two's-complement representability
//! - [`try_float_to_int`] / [`float_to_int_bits`] — truncating
//!   single-precision-to-integer conversion on raw bit patterns
//!
//! Every routine is a pure, total, O(1) function over its documented domain.
//! Nothing here holds state, allocates, or performs I/O, so all of it is
//! trivially safe to call from any number of threads.

pub mod error;
pub mod float;
pub mod word;

pub use error::FloatToIntError;
pub use float::{float_to_int_bits, try_float_to_int, FloatBits, FloatClass, OUT_OF_RANGE};
pub use word::{all_even_bits, bit_xor, fits_in_bits, logical_neg, logical_shift, tmax};

/// 32-bit word viewed unsigned
pub type Word = u32;

/// 32-bit word viewed as a signed two's-complement integer
pub type SWord = i32;
