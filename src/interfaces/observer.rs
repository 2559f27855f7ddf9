// ============================================================================
// Oracle Observer Interface
// Defines the contract for reporting equivalence-check progress and results
// ============================================================================

use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the oracle explores the input domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckMode {
    /// Generated inputs with shrinking of failures
    Randomized,
    /// Every input of a supplied set
    Exhaustive,
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMode::Randomized => write!(f, "randomized"),
            CheckMode::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// Events emitted by the equivalence oracle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OracleEvent {
    /// A check began
    CheckStarted {
        label: String,
        mode: CheckMode,
        timestamp: DateTime<Utc>,
    },

    /// Every explored input agreed
    CheckPassed {
        label: String,
        mode: CheckMode,
        cases: u64,
        timestamp: DateTime<Utc>,
    },

    /// The kernels disagreed; values are rendered with `Debug`
    CounterexampleFound {
        label: String,
        mode: CheckMode,
        input: String,
        reference: String,
        candidate: String,
        timestamp: DateTime<Utc>,
    },
}

/// Observer trait for processing oracle events
/// Implementations can handle logging, metrics, CI annotations, etc.
pub trait OracleObserver: Send + Sync {
    /// Handle an oracle event
    fn on_event(&self, event: OracleEvent);
}

/// No-op observer
pub struct NoOpObserver;

impl OracleObserver for NoOpObserver {
    fn on_event(&self, _event: OracleEvent) {}
}

/// Logging observer
pub struct LoggingObserver;

impl OracleObserver for LoggingObserver {
    fn on_event(&self, event: OracleEvent) {
        match &event {
            OracleEvent::CheckStarted { label, mode, .. } => {
                tracing::debug!(%label, %mode, "equivalence check started");
            },
            OracleEvent::CheckPassed {
                label, mode, cases, ..
            } => {
                tracing::debug!(%label, %mode, cases, "equivalence check passed");
            },
            OracleEvent::CounterexampleFound {
                label,
                mode,
                input,
                reference,
                candidate,
                ..
            } => {
                tracing::warn!(
                    %label,
                    %mode,
                    %input,
                    %reference,
                    %candidate,
                    "kernels disagree"
                );
            },
        }
    }
}
