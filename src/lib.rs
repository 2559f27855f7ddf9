// ============================================================================
// WAD Math Library
// 18-decimal fixed-point kernel over U256 with a differential equivalence oracle
// ============================================================================

//! # WAD Math
//!
//! Fixed-point arithmetic on 256-bit unsigned integers scaled by `WAD = 10^18`,
//! and an oracle that proves two implementations of it agree.
//!
//! ## Features
//!
//! - **Overflow-checked multiply-divide** with explicit round-down / round-up
//! - **Integer square root** with a fixed seven-step Newton iteration
//! - **`Wad` newtype** with decimal parsing and `rust_decimal` conversion
//! - **Pluggable kernels** behind the `WadKernel` trait
//! - **Equivalence oracle** with proptest shrinking and a parallel exhaustive mode
//!
//! ## Example
//!
//! ```rust
//! use wad_math::prelude::*;
//!
//! let two = U256::from(2u64) * WAD;
//! let three = U256::from(3u64) * WAD;
//! assert_eq!(mul_div_down(two, three), Ok(U256::from(6u64) * WAD));
//! assert_eq!(isqrt(U256::from(1_000_000u64)), U256::from(1_000u64));
//!
//! let oracle = EquivalenceOracle::new(OracleConfig::quick()).unwrap();
//! let verdict = oracle
//!     .check_operation(Operation::Isqrt, &CheckedKernel::new(), &WideKernel::new())
//!     .unwrap();
//! assert!(verdict.is_pass());
//! ```

pub mod interfaces;
pub mod kernel;
pub mod numeric;
pub mod oracle;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::{
        CheckMode, LoggingObserver, NoOpObserver, OracleEvent, OracleObserver, WadKernel,
    };
    pub use crate::kernel::{all_kernels, create_kernel, CheckedKernel, KernelKind, WideKernel};
    pub use crate::numeric::{
        div_wad_down, div_wad_up, full_mul_div, isqrt, mul_div, mul_div_down, mul_div_up,
        sqrt_wad, MathError, MathResult, Rounding, Wad, U256, WAD,
    };
    pub use crate::oracle::{
        Counterexample, EquivalenceOracle, Inputs, KernelVerdict, Operation, OracleConfig,
        OracleError, Verdict,
    };
}
