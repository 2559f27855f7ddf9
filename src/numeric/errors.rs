// ============================================================================
// Numeric Errors
// Error types for WAD fixed-point arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during WAD fixed-point arithmetic.
///
/// The kernel primitives (`mul_div_*`, `div_wad_*`, `full_mul_div`) only ever
/// return the first three variants. The remaining ones come from the `Wad`
/// value type's conversions and plain addition/subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MathError {
    /// An intermediate product `x * y` does not fit in 256 bits
    MulFailed,
    /// Division by a zero denominator
    DivFailed,
    /// 512-bit multiply-divide: zero denominator or quotient above U256::MAX
    FullMulDivFailed,
    /// Result exceeded U256::MAX
    Overflow,
    /// Result below zero
    Underflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::MulFailed => {
                write!(f, "multiplication failed: product exceeds 256 bits")
            },
            MathError::DivFailed => write!(f, "division failed: zero denominator"),
            MathError::FullMulDivFailed => write!(
                f,
                "full multiply-divide failed: zero denominator or quotient exceeds 256 bits"
            ),
            MathError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            MathError::Underflow => write!(f, "arithmetic underflow: result below zero"),
            MathError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            MathError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for WAD math operations
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MathError::MulFailed.to_string(),
            "multiplication failed: product exceeds 256 bits"
        );
        assert_eq!(
            MathError::DivFailed.to_string(),
            "division failed: zero denominator"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MathError::MulFailed, MathError::MulFailed);
        assert_ne!(MathError::MulFailed, MathError::FullMulDivFailed);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MathError::Underflow);
        assert_eq!(err.to_string(), "arithmetic underflow: result below zero");
    }
}
