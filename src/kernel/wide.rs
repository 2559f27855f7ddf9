// ============================================================================
// Wide Kernel
// Independent kernel using a 512-bit product and bitwise square root
// ============================================================================

use crate::interfaces::WadKernel;
use crate::numeric::{MathError, MathResult, U256, WAD};

/// Second, independently written implementation of the WAD primitives.
///
/// Products are formed at full 512-bit width, where they cannot wrap, and
/// rejected if the upper half is non-zero. Rounding up compares the
/// re-multiplied quotient with the product instead of taking a remainder.
/// The square root is extracted two bits at a time, with no estimate and
/// no division.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideKernel;

impl WideKernel {
    /// Create a new wide kernel.
    pub fn new() -> Self {
        Self
    }

    /// `x * y` if it fits in 256 bits.
    #[inline]
    fn narrow_product(x: U256, y: U256) -> MathResult<U256> {
        U256::try_from(x.full_mul(y)).map_err(|_| MathError::MulFailed)
    }

    /// `ceil(numerator / denominator)` for a non-zero denominator.
    #[inline]
    fn ceil_div(numerator: U256, denominator: U256) -> U256 {
        let quotient = numerator / denominator;
        // quotient * denominator <= numerator, no overflow
        if quotient * denominator == numerator {
            quotient
        } else {
            quotient + U256::one()
        }
    }
}

impl WadKernel for WideKernel {
    fn mul_div_down(&self, x: U256, y: U256) -> MathResult<U256> {
        Ok(Self::narrow_product(x, y)? / WAD)
    }

    fn mul_div_up(&self, x: U256, y: U256) -> MathResult<U256> {
        Ok(Self::ceil_div(Self::narrow_product(x, y)?, WAD))
    }

    fn div_wad_down(&self, x: U256, y: U256) -> MathResult<U256> {
        if y.is_zero() {
            return Err(MathError::DivFailed);
        }
        Ok(Self::narrow_product(x, WAD)? / y)
    }

    fn div_wad_up(&self, x: U256, y: U256) -> MathResult<U256> {
        if y.is_zero() {
            return Err(MathError::DivFailed);
        }
        Ok(Self::ceil_div(Self::narrow_product(x, WAD)?, y))
    }

    fn isqrt(&self, x: U256) -> U256 {
        if x.is_zero() {
            return U256::zero();
        }

        // Highest power of four not above x
        let mut bit = U256::one() << ((x.bits() - 1) & !1usize);
        let mut remainder = x;
        let mut root = U256::zero();

        while !bit.is_zero() {
            let trial = root + bit;
            if remainder >= trial {
                remainder = remainder - trial;
                root = (root >> 1usize) + bit;
            } else {
                root = root >> 1usize;
            }
            bit = bit >> 2usize;
        }

        root
    }

    fn name(&self) -> &'static str {
        "Wide"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_scenarios() {
        let kernel = WideKernel::new();
        let two = WAD * U256::from(2u64);
        let three = WAD * U256::from(3u64);

        assert_eq!(kernel.mul_div_down(two, three), Ok(WAD * U256::from(6u64)));
        assert_eq!(
            kernel.mul_div_up(U256::one(), WAD + U256::one()),
            Ok(U256::from(2u64))
        );
        assert_eq!(kernel.isqrt(WAD), U256::from(1_000_000_000u64));
    }

    #[test]
    fn test_wide_overflow_boundary() {
        let kernel = WideKernel::new();
        let y = U256::from(7u64);
        let limit = U256::MAX / y;

        assert!(kernel.mul_div_down(limit, y).is_ok());
        assert_eq!(
            kernel.mul_div_down(limit + U256::one(), y),
            Err(MathError::MulFailed)
        );
        assert_eq!(
            kernel.mul_div_up(U256::MAX, U256::MAX),
            Err(MathError::MulFailed)
        );
    }

    #[test]
    fn test_wide_div_wad() {
        let kernel = WideKernel::new();
        assert_eq!(
            kernel.div_wad_down(WAD, WAD * U256::from(3u64)),
            Ok(U256::from(333_333_333_333_333_333u64))
        );
        assert_eq!(
            kernel.div_wad_up(WAD, WAD * U256::from(3u64)),
            Ok(U256::from(333_333_333_333_333_334u64))
        );
        assert_eq!(kernel.div_wad_down(WAD, U256::zero()), Err(MathError::DivFailed));
    }

    #[test]
    fn test_wide_isqrt_boundaries() {
        let kernel = WideKernel::new();
        assert_eq!(kernel.isqrt(U256::zero()), U256::zero());
        assert_eq!(kernel.isqrt(U256::one()), U256::one());
        assert_eq!(kernel.isqrt(U256::from(3u64)), U256::one());
        assert_eq!(kernel.isqrt(U256::from(4u64)), U256::from(2u64));
        assert_eq!(
            kernel.isqrt(U256::MAX),
            (U256::one() << 128usize) - U256::one()
        );
    }

    #[test]
    fn test_wide_isqrt_prefix() {
        let kernel = WideKernel::new();
        for x in 0u64..50_000 {
            assert_eq!(kernel.isqrt(U256::from(x)), U256::from(x.isqrt()), "isqrt({})", x);
        }
    }

    #[test]
    fn test_wide_name() {
        assert_eq!(WideKernel::new().name(), "Wide");
    }
}
