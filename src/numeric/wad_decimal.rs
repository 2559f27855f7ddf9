// ============================================================================
// WAD Fixed-Point Value
// 18-decimal unsigned fixed-point number over a 256-bit integer
// ============================================================================

use super::errors::{MathError, MathResult};
use super::sqrt::sqrt_wad;
use super::wad::{div_wad_down, div_wad_up, mul_div_down, mul_div_up, WAD};
use primitive_types::U256;
use std::fmt;
use std::ops::{Add, Sub};

/// Unsigned fixed-point decimal with 18 decimal places.
///
/// Internally stores `value × 10^18` as a `U256`. All arithmetic goes
/// through the checked kernel functions, so every operation returns a
/// `MathResult` instead of wrapping.
///
/// # Value Range
/// - Minimum: 0
/// - Maximum: ~1.158 × 10^59
/// - Precision: 0.000000000000000001 (one wei)
///
/// # Example
/// ```
/// use wad_math::numeric::Wad;
///
/// let price: Wad = "2.5".parse().unwrap();
/// let qty = Wad::from_integer(4u64.into()).unwrap();
/// assert_eq!(price.checked_mul(qty).unwrap().to_string(), "10.000000000000000000");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Wad(U256);

impl Wad {
    /// The scale factor (10^18)
    pub const SCALE: U256 = WAD;

    /// Number of decimal places
    pub const DECIMALS: usize = 18;

    /// Zero value
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// One (1.0)
    pub const ONE: Self = Self(WAD);

    /// Maximum representable value
    pub const MAX: Self = Self(U256::MAX);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from the raw scaled representation.
    #[inline]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Create from a whole number.
    ///
    /// # Errors
    /// Returns `Overflow` if `value × 10^18` does not fit in 256 bits.
    #[inline]
    pub fn from_integer(value: U256) -> MathResult<Self> {
        value
            .checked_mul(WAD)
            .map(Self)
            .ok_or(MathError::Overflow)
    }

    /// Create from integer and fractional parts.
    ///
    /// `fraction` is in units of 10^-18 and must be below 10^18.
    ///
    /// ```
    /// use wad_math::numeric::Wad;
    ///
    /// // 123.456
    /// let x = Wad::from_parts(123u64.into(), 456_000_000_000_000_000).unwrap();
    /// assert_eq!(x.to_string(), "123.456000000000000000");
    /// ```
    #[inline]
    pub fn from_parts(integer: U256, fraction: u64) -> MathResult<Self> {
        let fraction = U256::from(fraction);
        if fraction >= WAD {
            return Err(MathError::InvalidInput);
        }

        Self::from_integer(integer)?
            .0
            .checked_add(fraction)
            .map(Self)
            .ok_or(MathError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 10^18).
    #[inline]
    pub const fn raw_value(self) -> U256 {
        self.0
    }

    /// Get the integer part (truncated).
    #[inline]
    pub fn integer_part(self) -> U256 {
        self.0 / WAD
    }

    /// Get the fractional part in units of 10^-18.
    #[inline]
    pub fn fractional_part(self) -> u64 {
        (self.0 % WAD).low_u64()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the result exceeds `Wad::MAX`.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(MathError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Underflow` if `rhs > self`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(MathError::Underflow)
    }

    /// Multiply, rounding down.
    ///
    /// # Errors
    /// Returns `MulFailed` if the raw product overflows 256 bits.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> MathResult<Self> {
        mul_div_down(self.0, rhs.0).map(Self)
    }

    /// Multiply, rounding up.
    ///
    /// # Errors
    /// Returns `MulFailed` if the raw product overflows 256 bits.
    #[inline]
    pub fn checked_mul_up(self, rhs: Self) -> MathResult<Self> {
        mul_div_up(self.0, rhs.0).map(Self)
    }

    /// Divide, rounding down.
    ///
    /// # Errors
    /// - `DivFailed` if `rhs` is zero
    /// - `MulFailed` if `self × 10^18` overflows 256 bits
    #[inline]
    pub fn checked_div(self, rhs: Self) -> MathResult<Self> {
        div_wad_down(self.0, rhs.0).map(Self)
    }

    /// Divide, rounding up.
    ///
    /// # Errors
    /// - `DivFailed` if `rhs` is zero
    /// - `MulFailed` if `self × 10^18` overflows 256 bits
    #[inline]
    pub fn checked_div_up(self, rhs: Self) -> MathResult<Self> {
        div_wad_up(self.0, rhs.0).map(Self)
    }

    /// Square root, rounded down.
    ///
    /// # Errors
    /// Returns `MulFailed` if `self × 10^18` overflows 256 bits.
    #[inline]
    pub fn sqrt(self) -> MathResult<Self> {
        sqrt_wad(self.0).map(Self)
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in production)
impl Add for Wad {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Wad addition overflow")
    }
}

impl Sub for Wad {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Wad subtraction underflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wad({}, raw={})", self, self.0)
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0>width$}",
            self.integer_part(),
            self.fractional_part(),
            width = Self::DECIMALS
        )
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Wad {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `InvalidInput` if the decimal is negative
    /// - `PrecisionLoss` if it carries non-zero digits beyond 18 places
    pub fn from_decimal(d: rust_decimal::Decimal) -> MathResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(MathError::InvalidInput);
        }

        let mantissa = d.mantissa().unsigned_abs();
        let scale = d.scale() as usize;

        if scale <= Self::DECIMALS {
            // mantissa < 2^96 and 10^18 < 2^60, so this cannot overflow
            return Ok(Self(
                U256::from(mantissa) * U256::exp10(Self::DECIMALS - scale),
            ));
        }

        let divisor = 10u128.pow((scale - Self::DECIMALS) as u32);
        if mantissa % divisor != 0 {
            return Err(MathError::PrecisionLoss);
        }
        Ok(Self(U256::from(mantissa / divisor)))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the raw value needs more than the 96-bit
    /// mantissa a `Decimal` can hold.
    pub fn to_decimal(self) -> MathResult<rust_decimal::Decimal> {
        if self.0.bits() > 96 {
            return Err(MathError::Overflow);
        }
        rust_decimal::Decimal::try_from_i128_with_scale(
            self.0.low_u128() as i128,
            Self::DECIMALS as u32,
        )
        .map_err(|_| MathError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Wad {
    type Err = MathError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123.000000000000000000
    /// - "0.5" -> 0.500000000000000000
    /// - ".25" -> 0.250000000000000000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "." {
            return Err(MathError::InvalidInput);
        }

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, Some(frac_str)),
            None => (s, None),
        };

        let int_val = if int_str.is_empty() {
            U256::zero()
        } else if !int_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MathError::InvalidInput);
        } else {
            // Only digits remain, so the one way to fail is exceeding 256 bits
            U256::from_dec_str(int_str).map_err(|_| MathError::Overflow)?
        };

        let frac_val: u64 = match frac_str {
            None | Some("") => 0,
            Some(frac) if !frac.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(MathError::InvalidInput)
            },
            Some(frac) if frac.len() > Self::DECIMALS => return Err(MathError::PrecisionLoss),
            Some(frac) => {
                // Pad with zeros to 18 digits
                let padded = format!("{:0<width$}", frac, width = Self::DECIMALS);
                padded.parse().map_err(|_| MathError::InvalidInput)?
            },
        };

        Self::from_parts(int_val, frac_val)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn int(n: u64) -> Wad {
        Wad::from_integer(U256::from(n)).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(Wad::SCALE, U256::exp10(18));
        assert!(Wad::ZERO.is_zero());
        assert_eq!(Wad::ONE.raw_value(), WAD);
    }

    #[test]
    fn test_from_integer() {
        let x = int(100);
        assert_eq!(x.raw_value(), U256::from(100u64) * WAD);
        assert_eq!(x.integer_part(), U256::from(100u64));
        assert_eq!(x.fractional_part(), 0);

        assert_eq!(Wad::from_integer(U256::MAX), Err(MathError::Overflow));
    }

    #[test]
    fn test_from_parts() {
        let x = Wad::from_parts(U256::from(123u64), 456_000_000_000_000_000).unwrap();
        assert_eq!(x.integer_part(), U256::from(123u64));
        assert_eq!(x.fractional_part(), 456_000_000_000_000_000);

        assert_eq!(
            Wad::from_parts(U256::one(), 1_000_000_000_000_000_000),
            Err(MathError::InvalidInput)
        );
    }

    #[test]
    fn test_checked_add_sub() {
        assert_eq!(int(100).checked_add(int(50)), Ok(int(150)));
        assert_eq!(int(100).checked_sub(int(30)), Ok(int(70)));
        assert_eq!(int(30).checked_sub(int(100)), Err(MathError::Underflow));
        assert_eq!(Wad::MAX.checked_add(Wad::ONE), Err(MathError::Overflow));
    }

    #[test]
    fn test_checked_mul() {
        // 2.5 * 4 = 10
        let a: Wad = "2.5".parse().unwrap();
        assert_eq!(a.checked_mul(int(4)), Ok(int(10)));

        // 1.5 * 1.5 = 2.25
        let x: Wad = "1.5".parse().unwrap();
        assert_eq!(x.checked_mul(x).unwrap().to_string(), "2.250000000000000000");

        assert_eq!(Wad::MAX.checked_mul(Wad::MAX), Err(MathError::MulFailed));
    }

    #[test]
    fn test_checked_mul_rounding() {
        let tiny = Wad::from_raw(U256::one());
        let just_over_one = Wad::from_raw(WAD + U256::one());
        assert_eq!(tiny.checked_mul(just_over_one), Ok(tiny));
        assert_eq!(
            tiny.checked_mul_up(just_over_one),
            Ok(Wad::from_raw(U256::from(2u64)))
        );
    }

    #[test]
    fn test_checked_div() {
        let third = int(1).checked_div(int(3)).unwrap();
        assert_eq!(third.to_string(), "0.333333333333333333");
        let third_up = int(1).checked_div_up(int(3)).unwrap();
        assert_eq!(third_up.to_string(), "0.333333333333333334");

        assert_eq!(int(1).checked_div(Wad::ZERO), Err(MathError::DivFailed));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(int(9).sqrt(), Ok(int(3)));
        let quarter: Wad = "0.25".parse().unwrap();
        assert_eq!(quarter.sqrt().unwrap().to_string(), "0.500000000000000000");
    }

    #[test]
    fn test_ordering() {
        assert!(int(100) > int(50));
        assert_eq!(int(100).min(int(50)), int(50));
        assert_eq!(int(100).max(int(50)), int(100));
    }

    #[test]
    fn test_display() {
        assert_eq!(Wad::ZERO.to_string(), "0.000000000000000000");
        assert_eq!(Wad::from_raw(U256::one()).to_string(), "0.000000000000000001");
        assert_eq!(int(42).to_string(), "42.000000000000000000");
        assert_eq!(
            format!("{:?}", Wad::ONE),
            "Wad(1.000000000000000000, raw=1000000000000000000)"
        );
    }

    #[test]
    fn test_from_str() {
        let x: Wad = "123.456".parse().unwrap();
        assert_eq!(x.integer_part(), U256::from(123u64));
        assert_eq!(x.fractional_part(), 456_000_000_000_000_000);

        let y: Wad = ".25".parse().unwrap();
        assert_eq!(y.fractional_part(), 250_000_000_000_000_000);

        let z: Wad = " 7. ".parse().unwrap();
        assert_eq!(z, int(7));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("".parse::<Wad>(), Err(MathError::InvalidInput));
        assert_eq!("abc".parse::<Wad>(), Err(MathError::InvalidInput));
        assert_eq!("-1".parse::<Wad>(), Err(MathError::InvalidInput));
        assert_eq!("1.+5".parse::<Wad>(), Err(MathError::InvalidInput));
        assert_eq!(
            "1.1234567890123456789".parse::<Wad>(),
            Err(MathError::PrecisionLoss)
        );
        // 2^256 does not fit
        assert_eq!(
            "115792089237316195423570985008687907853269984665640564039457584007913129639936"
                .parse::<Wad>(),
            Err(MathError::Overflow)
        );
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = Wad::from_decimal(d).unwrap();
        assert_eq!(x.integer_part(), U256::from(123u64));
        assert_eq!(x.fractional_part(), 450_000_000_000_000_000);

        // 28 decimal places with only zeros past the 18th
        let fine = Decimal::from_i128_with_scale(15_000_000_000_000_000_000_000_000_000, 28);
        assert_eq!(Wad::from_decimal(fine).unwrap().to_string(), "1.500000000000000000");

        let too_fine = Decimal::from_i128_with_scale(1, 28);
        assert_eq!(Wad::from_decimal(too_fine), Err(MathError::PrecisionLoss));

        assert_eq!(Wad::from_decimal(Decimal::new(-1, 0)), Err(MathError::InvalidInput));
    }

    #[test]
    fn test_to_decimal() {
        let x: Wad = "123.456".parse().unwrap();
        assert_eq!(x.to_decimal().unwrap(), Decimal::new(123_456, 3));
        assert_eq!(Wad::MAX.to_decimal(), Err(MathError::Overflow));
    }
}
