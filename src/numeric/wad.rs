// ============================================================================
// WAD Multiply-Divide Kernel
// Checked (x * y) / d with explicit rounding, over 256-bit unsigned integers
// ============================================================================

use super::errors::{MathError, MathResult};
use primitive_types::{U256, U512};

/// The fixed-point scale: 10^18, i.e. 18 decimal places.
pub const WAD: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// Rounding direction for division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Truncate toward zero (floor for unsigned values)
    Down,
    /// Round toward positive infinity (ceiling)
    Up,
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Multiply `x * y`, rejecting the pair before the product is formed if it
/// would not fit in 256 bits.
#[inline]
fn checked_product(x: U256, y: U256) -> MathResult<U256> {
    if !y.is_zero() && x > U256::MAX / y {
        return Err(MathError::MulFailed);
    }
    Ok(x * y)
}

/// Divide and apply the rounding policy. `denominator` must be non-zero.
#[inline]
fn divide(numerator: U256, denominator: U256, rounding: Rounding) -> U256 {
    let (quotient, remainder) = numerator.div_mod(denominator);
    match rounding {
        Rounding::Down => quotient,
        // quotient <= U256::MAX / denominator, so the increment cannot wrap
        // for any denominator > 1; for denominator == 1 the remainder is zero.
        Rounding::Up if !remainder.is_zero() => quotient + U256::one(),
        Rounding::Up => quotient,
    }
}

// ============================================================================
// WAD Operations
// ============================================================================

/// `floor(x * y / WAD)`.
///
/// # Errors
/// Returns `MulFailed` if `x * y` would overflow 256 bits.
///
/// # Example
/// ```
/// use wad_math::numeric::{mul_div_down, WAD};
/// use primitive_types::U256;
///
/// let six = mul_div_down(WAD * U256::from(2u64), WAD * U256::from(3u64)).unwrap();
/// assert_eq!(six, WAD * U256::from(6u64));
/// ```
#[inline]
pub fn mul_div_down(x: U256, y: U256) -> MathResult<U256> {
    Ok(checked_product(x, y)? / WAD)
}

/// `ceil(x * y / WAD)`.
///
/// The round-down quotient plus one exactly when `x * y` is not a multiple
/// of `WAD`.
///
/// # Errors
/// Returns `MulFailed` if `x * y` would overflow 256 bits.
#[inline]
pub fn mul_div_up(x: U256, y: U256) -> MathResult<U256> {
    Ok(divide(checked_product(x, y)?, WAD, Rounding::Up))
}

/// `floor(x * WAD / y)`.
///
/// # Errors
/// - `DivFailed` if `y` is zero
/// - `MulFailed` if `x * WAD` would overflow 256 bits
#[inline]
pub fn div_wad_down(x: U256, y: U256) -> MathResult<U256> {
    mul_div(x, WAD, y, Rounding::Down)
}

/// `ceil(x * WAD / y)`.
///
/// # Errors
/// - `DivFailed` if `y` is zero
/// - `MulFailed` if `x * WAD` would overflow 256 bits
#[inline]
pub fn div_wad_up(x: U256, y: U256) -> MathResult<U256> {
    mul_div(x, WAD, y, Rounding::Up)
}

/// `(x * y) / denominator` with the given rounding, all in 256 bits.
///
/// The denominator is checked first, so a zero denominator reports
/// `DivFailed` even when the product would also overflow.
///
/// # Errors
/// - `DivFailed` if `denominator` is zero
/// - `MulFailed` if `x * y` would overflow 256 bits
pub fn mul_div(x: U256, y: U256, denominator: U256, rounding: Rounding) -> MathResult<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivFailed);
    }
    let product = checked_product(x, y)?;
    Ok(divide(product, denominator, rounding))
}

/// `(x * y) / denominator` with a 512-bit intermediate product.
///
/// Succeeds whenever the rounded quotient fits in 256 bits, even if `x * y`
/// itself does not.
///
/// # Errors
/// Returns `FullMulDivFailed` if `denominator` is zero or the rounded
/// quotient exceeds `U256::MAX`.
pub fn full_mul_div(
    x: U256,
    y: U256,
    denominator: U256,
    rounding: Rounding,
) -> MathResult<U256> {
    if denominator.is_zero() {
        return Err(MathError::FullMulDivFailed);
    }

    let product: U512 = x.full_mul(y);
    let (mut quotient, remainder) = product.div_mod(U512::from(denominator));
    if rounding == Rounding::Up && !remainder.is_zero() {
        // product < 2^512 and denominator >= 1, so quotient < 2^512 - 1
        quotient = quotient + U512::one();
    }

    U256::try_from(quotient).map_err(|_| MathError::FullMulDivFailed)
}

// ============================================================================
// Tests
// ============================================================================
