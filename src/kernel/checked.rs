// ============================================================================
// Checked Kernel
// Reference kernel backed by the numeric module's free functions
// ============================================================================

use crate::interfaces::WadKernel;
use crate::numeric::{self, MathResult, U256};

/// Reference implementation of the WAD primitives.
///
/// Overflow is rejected with a division pre-check (`x <= MAX / y`) before
/// multiplying, and the square root uses the bit-length seeded Newton
/// iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedKernel;

impl CheckedKernel {
    /// Create a new checked kernel.
    pub fn new() -> Self {
        Self
    }
}

impl WadKernel for CheckedKernel {
    #[inline]
    fn mul_div_down(&self, x: U256, y: U256) -> MathResult<U256> {
        numeric::mul_div_down(x, y)
    }

    #[inline]
    fn mul_div_up(&self, x: U256, y: U256) -> MathResult<U256> {
        numeric::mul_div_up(x, y)
    }

    #[inline]
    fn div_wad_down(&self, x: U256, y: U256) -> MathResult<U256> {
        numeric::div_wad_down(x, y)
    }

    #[inline]
    fn div_wad_up(&self, x: U256, y: U256) -> MathResult<U256> {
        numeric::div_wad_up(x, y)
    }

    #[inline]
    fn isqrt(&self, x: U256) -> U256 {
        numeric::isqrt(x)
    }

    fn name(&self) -> &'static str {
        "Checked"
    }
}
