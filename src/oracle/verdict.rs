// ============================================================================
// Oracle Verdicts and Errors
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An input on which the two implementations disagree, with both outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Counterexample<I, O> {
    pub input: I,
    pub reference: O,
    pub candidate: O,
}

impl<I: fmt::Debug, O: fmt::Debug> fmt::Display for Counterexample<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input {:?}: reference returned {:?}, candidate returned {:?}",
            self.input, self.reference, self.candidate
        )
    }
}

/// Outcome of an equivalence check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict<I, O> {
    /// Both implementations agreed on every explored input
    Pass { cases: u64 },
    /// The smallest disagreement found
    Fail(Counterexample<I, O>),
}

impl<I, O> Verdict<I, O> {
    /// True if no counterexample was found.
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass { .. })
    }

    /// The counterexample, if the check failed.
    pub fn counterexample(&self) -> Option<&Counterexample<I, O>> {
        match self {
            Verdict::Pass { .. } => None,
            Verdict::Fail(counterexample) => Some(counterexample),
        }
    }

    /// Consume the verdict, yielding the counterexample if any.
    pub fn into_counterexample(self) -> Option<Counterexample<I, O>> {
        match self {
            Verdict::Pass { .. } => None,
            Verdict::Fail(counterexample) => Some(counterexample),
        }
    }
}

/// Errors that prevent the oracle from reaching a verdict.
///
/// A disagreement between kernels is not an error; it is `Verdict::Fail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// Configuration did not validate
    InvalidConfig(String),
    /// The input generator gave up before running all cases
    Aborted(String),
    /// A function panicked while re-running a shrunk randomized input
    Panicked(String),
    /// An exhaustive worker thread panicked
    WorkerPanicked,
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::InvalidConfig(reason) => write!(f, "invalid oracle config: {}", reason),
            OracleError::Aborted(reason) => write!(f, "equivalence check aborted: {}", reason),
            OracleError::Panicked(reason) => write!(f, "equivalence check panicked: {}", reason),
            OracleError::WorkerPanicked => write!(f, "exhaustive worker thread panicked"),
        }
    }
}

impl std::error::Error for OracleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_accessors() {
        let pass: Verdict<u64, bool> = Verdict::Pass { cases: 10 };
        assert!(pass.is_pass());
        assert!(pass.counterexample().is_none());

        let fail = Verdict::Fail(Counterexample {
            input: 7u64,
            reference: true,
            candidate: false,
        });
        assert!(!fail.is_pass());
        assert_eq!(fail.counterexample().map(|c| c.input), Some(7));
        assert_eq!(fail.into_counterexample().map(|c| c.candidate), Some(false));
    }

    #[test]
    fn test_counterexample_display() {
        let counterexample = Counterexample {
            input: (2u64, 3u64),
            reference: Ok::<u64, ()>(6),
            candidate: Ok(7),
        };
        assert_eq!(
            counterexample.to_string(),
            "input (2, 3): reference returned Ok(6), candidate returned Ok(7)"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            OracleError::InvalidConfig("cases must be positive".to_string()).to_string(),
            "invalid oracle config: cases must be positive"
        );
        assert_eq!(
            OracleError::Panicked("input 3: boom".to_string()).to_string(),
            "equivalence check panicked: input 3: boom"
        );
    }
}
