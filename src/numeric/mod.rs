// ============================================================================
// Numeric Module
// WAD fixed-point arithmetic kernel over 256-bit unsigned integers
// ============================================================================
//
// This module provides:
// - mul_div_down / mul_div_up: (x * y) / WAD with explicit rounding
// - div_wad_*, mul_div, full_mul_div: the general multiply-divide family
// - isqrt / sqrt_wad: integer square root and its WAD-scaled form
// - Wad: 18-decimal fixed-point newtype built on the kernel
// - MathError: the closed set of failure signals
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics, no wrapping)
// - Overflow is detected before the overflowing multiplication happens
// - Pure functions: no state is retained between calls

mod errors;
mod sqrt;
mod wad;
mod wad_decimal;

pub use errors::{MathError, MathResult};
pub use sqrt::{isqrt, sqrt_wad, NEWTON_ITERATIONS};
pub use wad::{
    div_wad_down, div_wad_up, full_mul_div, mul_div, mul_div_down, mul_div_up, Rounding, WAD,
};
pub use wad_decimal::Wad;

pub use primitive_types::U256;
