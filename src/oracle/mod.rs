// ============================================================================
// Oracle Module
// Differential equivalence checking between two implementations
// ============================================================================
//
// Two modes share one verdict type:
// - Randomized: proptest-driven generation with shrinking to a minimal input
// - Exhaustive: every input of an explicit set, split across scoped threads
//
// Kernel-level helpers compare two WadKernel implementations operation by
// operation; the generic entry points accept any pair of functions.

mod checker;
mod config;
mod operation;
pub mod strategy;
mod verdict;

pub use checker::{EquivalenceOracle, KernelVerdict};
pub use config::OracleConfig;
pub use operation::{Inputs, Operation};
pub use verdict::{Counterexample, OracleError, Verdict};
