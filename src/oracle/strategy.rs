// ============================================================================
// Input Strategies
// proptest generators for 256-bit kernel inputs
// ============================================================================

use crate::numeric::{U256, WAD};
use proptest::prelude::*;

/// Uniformly random 256-bit values. Shrinks limb by limb toward zero.
pub fn any_u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256)
}

/// Whole multiples of `WAD`, i.e. integral fixed-point values.
pub fn wad_multiple() -> impl Strategy<Value = U256> {
    any::<u64>().prop_map(|k| U256::from(k) * WAD)
}

/// Values within a million of `U256::MAX`.
pub fn near_max() -> impl Strategy<Value = U256> {
    (0u64..=1_000_000).prop_map(|offset| U256::MAX - U256::from(offset))
}

/// Weighted mixture covering small values, 128-bit values, WAD multiples,
/// values next to `U256::MAX` and the full 256-bit range.
///
/// Uniform 256-bit pairs almost always overflow a product, so most of the
/// weight goes to ranges where `x * y` still fits.
pub fn u256() -> BoxedStrategy<U256> {
    prop_oneof![
        3 => (0u64..=1_000).prop_map(U256::from),
        3 => any::<u128>().prop_map(U256::from),
        2 => wad_multiple(),
        1 => near_max(),
        3 => any_u256(),
    ]
    .boxed()
}

/// Independent pair drawn from [`u256`].
pub fn u256_pair() -> BoxedStrategy<(U256, U256)> {
    (u256(), u256()).boxed()
}

/// Hand-picked edge values for exhaustive grids: zero and one, around `WAD`,
/// word boundaries, the largest value a WAD product can take, and `U256::MAX`.
pub fn boundary_values() -> Vec<U256> {
    let one = U256::one();
    let two_pow = |bits: usize| one << bits;

    vec![
        U256::zero(),
        one,
        U256::from(2u64),
        U256::from(3u64),
        WAD - one,
        WAD,
        WAD + one,
        WAD * U256::from(2u64),
        WAD * U256::from(3u64),
        two_pow(64) - one,
        two_pow(64),
        two_pow(128) - one,
        two_pow(128),
        U256::MAX / WAD,
        U256::MAX / WAD + one,
        two_pow(255),
        U256::MAX - one,
        U256::MAX,
    ]
}
