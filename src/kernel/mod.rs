// ============================================================================
// Kernel Module
// Interchangeable implementations of the WAD primitives
// ============================================================================

mod checked;
pub mod factory;
mod wide;

pub use checked::CheckedKernel;
pub use factory::{all_kernels, create_kernel, KernelKind};
pub use wide::WideKernel;
