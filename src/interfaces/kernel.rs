// ============================================================================
// WAD Kernel Interface
// Uniform call surface over independently implemented arithmetic kernels
// ============================================================================

use crate::numeric::{MathResult, U256};

/// An arithmetic kernel exposing the WAD primitives.
///
/// Every implementation must compute the same mathematical functions:
/// `floor`/`ceil` of `x * y / WAD`, `floor`/`ceil` of `x * WAD / y`, and
/// `floor(sqrt(x))`, failing with the same `MathError` kinds. Two kernels
/// that satisfy this contract are interchangeable, which is what the
/// equivalence oracle checks.
///
/// # Thread Safety
/// Kernels are stateless and must be `Send + Sync` so the oracle can call
/// them from several worker threads at once.
pub trait WadKernel: Send + Sync {
    /// `floor(x * y / WAD)`, `MulFailed` if `x * y` overflows.
    fn mul_div_down(&self, x: U256, y: U256) -> MathResult<U256>;

    /// `ceil(x * y / WAD)`, `MulFailed` if `x * y` overflows.
    fn mul_div_up(&self, x: U256, y: U256) -> MathResult<U256>;

    /// `floor(x * WAD / y)`; `DivFailed` for `y == 0`, `MulFailed` on overflow.
    fn div_wad_down(&self, x: U256, y: U256) -> MathResult<U256>;

    /// `ceil(x * WAD / y)`; `DivFailed` for `y == 0`, `MulFailed` on overflow.
    fn div_wad_up(&self, x: U256, y: U256) -> MathResult<U256>;

    /// `floor(sqrt(x))`. Total.
    fn isqrt(&self, x: U256) -> U256;

    /// Get the name of this kernel.
    ///
    /// Used for logging, counterexample reports and benchmarking.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{MathError, WAD};

    // Integer-only kernel, valid for small inputs
    struct MockKernel;

    impl WadKernel for MockKernel {
        fn mul_div_down(&self, x: U256, y: U256) -> MathResult<U256> {
            let product = x.checked_mul(y).ok_or(MathError::MulFailed)?;
            Ok(product / WAD)
        }

        fn mul_div_up(&self, x: U256, y: U256) -> MathResult<U256> {
            let product = x.checked_mul(y).ok_or(MathError::MulFailed)?;
            Ok((product + WAD - U256::one()) / WAD)
        }

        fn div_wad_down(&self, x: U256, y: U256) -> MathResult<U256> {
            if y.is_zero() {
                return Err(MathError::DivFailed);
            }
            Ok(x.checked_mul(WAD).ok_or(MathError::MulFailed)? / y)
        }

        fn div_wad_up(&self, x: U256, y: U256) -> MathResult<U256> {
            if y.is_zero() {
                return Err(MathError::DivFailed);
            }
            let numerator = x.checked_mul(WAD).ok_or(MathError::MulFailed)?;
            Ok((numerator + y - U256::one()) / y)
        }

        fn isqrt(&self, x: U256) -> U256 {
            x.integer_sqrt()
        }

        fn name(&self) -> &'static str {
            "Mock"
        }
    }

    #[test]
    fn test_trait_can_be_implemented() {
        let kernel = MockKernel;
        assert_eq!(kernel.name(), "Mock");
    }

    #[test]
    fn test_trait_object_dispatch() {
        let kernel: Box<dyn WadKernel> = Box::new(MockKernel);
        let two = WAD * U256::from(2u64);
        let three = WAD * U256::from(3u64);

        assert_eq!(kernel.mul_div_down(two, three), Ok(WAD * U256::from(6u64)));
        assert_eq!(kernel.mul_div_up(U256::one(), U256::one()), Ok(U256::one()));
        assert_eq!(kernel.div_wad_down(two, U256::zero()), Err(MathError::DivFailed));
        assert_eq!(kernel.isqrt(U256::from(17u64)), U256::from(4u64));
    }
}
