// ============================================================================
// Integer Square Root
// Bit-length seeded estimate followed by a fixed number of Newton steps
// ============================================================================

use super::errors::{MathError, MathResult};
use super::wad::WAD;
use primitive_types::U256;

/// Range reductions for the initial estimate, as `(bit length, shift)`.
///
/// Whenever the remaining value is at least `2^bit_length` it is shifted
/// right by `shift` and the seed is scaled by `2^(shift / 2)`. After all four
/// steps the remaining value is below `2^24`.
const ESTIMATE_STEPS: [(usize, usize); 4] = [(136, 128), (72, 64), (40, 32), (24, 16)];

/// Seed for the closed-form estimate. `sqrt(x)` is approximated on
/// `[0, 2^24)` by `181 * (x + 2^16) / 2^18`.
const ESTIMATE_SEED: u64 = 181;

/// Babylonian refinements applied after the initial estimate. Enough to
/// reach `floor(sqrt(x))` or `floor(sqrt(x)) + 1` for every 256-bit input.
pub const NEWTON_ITERATIONS: usize = 7;

/// Initial estimate within a small constant factor of `sqrt(x)`.
#[inline]
fn initial_estimate(x: U256) -> U256 {
    let mut reduced = x;
    let mut seed = U256::from(ESTIMATE_SEED);

    for &(bit_length, shift) in ESTIMATE_STEPS.iter() {
        // reduced >= 2^bit_length
        if reduced.bits() > bit_length {
            reduced = reduced >> shift;
            seed = seed << (shift / 2);
        }
    }

    (seed * (reduced + U256::from(65_536u64))) >> 18usize
}

/// Integer square root: `floor(sqrt(x))`.
///
/// Total over `U256`. Runs exactly [`NEWTON_ITERATIONS`] Babylonian steps
/// from the estimate, then corrects the `floor + 1` case the iteration can
/// oscillate into when `x + 1` is a perfect square.
///
/// # Example
/// ```
/// use wad_math::numeric::isqrt;
/// use primitive_types::U256;
///
/// assert_eq!(isqrt(U256::exp10(18)), U256::exp10(9));
/// ```
pub fn isqrt(x: U256) -> U256 {
    if x.is_zero() {
        return U256::zero();
    }

    let mut z = initial_estimate(x);
    for _ in 0..NEWTON_ITERATIONS {
        z = (z + x / z) >> 1usize;
    }

    if x / z < z {
        z - U256::one()
    } else {
        z
    }
}

/// Square root of a WAD fixed-point value, itself in WAD: `isqrt(x * WAD)`.
///
/// # Errors
/// Returns `MulFailed` if `x * WAD` would overflow 256 bits.
pub fn sqrt_wad(x: U256) -> MathResult<U256> {
    if x > U256::MAX / WAD {
        return Err(MathError::MulFailed);
    }
    Ok(isqrt(x * WAD))
}

// ============================================================================
// Tests
// ============================================================================
