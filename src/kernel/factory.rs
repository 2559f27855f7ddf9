// ============================================================================
// Kernel Factory
// Selection of kernel implementations by kind
// ============================================================================

use super::checked::CheckedKernel;
use super::wide::WideKernel;
use crate::interfaces::WadKernel;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Available kernel implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KernelKind {
    /// Division pre-check, Newton square root
    Checked,
    /// 512-bit product, bitwise square root
    Wide,
}

impl KernelKind {
    /// Every kernel kind, reference first.
    pub const ALL: [KernelKind; 2] = [KernelKind::Checked, KernelKind::Wide];
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelKind::Checked => write!(f, "checked"),
            KernelKind::Wide => write!(f, "wide"),
        }
    }
}

impl FromStr for KernelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checked" => Ok(KernelKind::Checked),
            "wide" => Ok(KernelKind::Wide),
            other => Err(format!("Unknown kernel kind: {}", other)),
        }
    }
}

/// Create a kernel of the given kind.
///
/// # Example
/// ```
/// use wad_math::kernel::{create_kernel, KernelKind};
///
/// let kernel = create_kernel(KernelKind::Wide);
/// assert_eq!(kernel.name(), "Wide");
/// ```
pub fn create_kernel(kind: KernelKind) -> Arc<dyn WadKernel> {
    let kernel: Arc<dyn WadKernel> = match kind {
        KernelKind::Checked => Arc::new(CheckedKernel::new()),
        KernelKind::Wide => Arc::new(WideKernel::new()),
    };
    tracing::debug!(%kind, name = kernel.name(), "created WAD kernel");
    kernel
}

/// Create one kernel of every kind, in [`KernelKind::ALL`] order.
pub fn all_kernels() -> Vec<Arc<dyn WadKernel>> {
    KernelKind::ALL.iter().map(|&kind| create_kernel(kind)).collect()
}
