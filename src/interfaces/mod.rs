// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod kernel;
mod observer;

pub use kernel::WadKernel;
pub use observer::{CheckMode, LoggingObserver, NoOpObserver, OracleEvent, OracleObserver};
