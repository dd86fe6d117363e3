//! # Error Types for Float-to-Int Conversion

use thiserror::Error;

/// Why a single-precision bit pattern has no 32-bit integer value.
///
/// [`crate::float_to_int_bits`] collapses every variant into the
/// [`crate::OUT_OF_RANGE`] sentinel; this type is how callers of the checked
/// API tell the cases apart.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FloatToIntError {
    #[error("not a number")]
    NotANumber,

    #[error("infinity has no integer value")]
    Infinite { negative: bool },

    #[error("magnitude exceeds the signed 32-bit range")]
    Overflow { negative: bool },
}

impl FloatToIntError {
    /// The sign of the offending input, where one is known. NaN payloads
    /// carry a sign bit too, but it has no meaning for conversion.
    pub fn negative(&self) -> Option<bool> {
        match self {
            FloatToIntError::NotANumber => None,
            FloatToIntError::Infinite { negative } | FloatToIntError::Overflow { negative } => {
                Some(*negative)
            }
        }
    }

    /// True when the input was finite but too large in magnitude.
    pub fn is_overflow(&self) -> bool {
        matches!(self, FloatToIntError::Overflow { .. })
    }
}
