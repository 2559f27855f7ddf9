// ============================================================================
// Equivalence Oracle
// Differential check that two implementations agree on every explored input
// ============================================================================

use super::config::OracleConfig;
use super::operation::{Inputs, Operation};
use super::verdict::{Counterexample, OracleError, Verdict};
use crate::interfaces::{CheckMode, LoggingObserver, OracleEvent, OracleObserver, WadKernel};
use crate::numeric::{MathResult, U256};
use chrono::Utc;
use parking_lot::Mutex;
use proptest::strategy::Strategy;
use proptest::test_runner::{RngAlgorithm, TestCaseError, TestError, TestRng, TestRunner};
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Verdict type for kernel operation checks
pub type KernelVerdict = Verdict<Inputs, MathResult<U256>>;

/// Differential equivalence oracle.
///
/// Compares a reference and a candidate implementation of the same function
/// and reports the first (randomized: smallest after shrinking; exhaustive:
/// earliest in enumeration order) input on which they disagree. The oracle
/// only calls the two functions; it holds no state between checks.
///
/// # Example
/// ```
/// use wad_math::kernel::{CheckedKernel, WideKernel};
/// use wad_math::oracle::{EquivalenceOracle, OracleConfig, Operation};
///
/// let oracle = EquivalenceOracle::new(OracleConfig::quick()).unwrap();
/// let verdict = oracle
///     .check_operation(Operation::MulDivUp, &CheckedKernel::new(), &WideKernel::new())
///     .unwrap();
/// assert!(verdict.is_pass());
/// ```
pub struct EquivalenceOracle {
    config: OracleConfig,
    observer: Arc<dyn OracleObserver>,
}

impl EquivalenceOracle {
    /// Create an oracle that logs its events through `tracing`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        config.validate().map_err(OracleError::InvalidConfig)?;
        Ok(Self {
            config,
            observer: Arc::new(LoggingObserver),
        })
    }

    /// Builder method: Replace the event observer
    pub fn with_observer(mut self, observer: Arc<dyn OracleObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    // ========================================================================
    // Generic Checks
    // ========================================================================

    /// Randomized check: draw `config.cases` inputs from `inputs` and compare
    /// `reference(input)` with `candidate(input)`.
    ///
    /// On disagreement the failing input is shrunk by proptest and both
    /// functions are re-run on the minimal input to fill the counterexample.
    ///
    /// # Errors
    /// Returns `Aborted` if the strategy rejects too many inputs, and
    /// `Panicked` if either function panics on the shrunk failing input.
    pub fn check<S, O, F, G>(
        &self,
        label: &str,
        inputs: S,
        reference: F,
        candidate: G,
    ) -> Result<Verdict<S::Value, O>, OracleError>
    where
        S: Strategy,
        O: PartialEq + Debug,
        F: Fn(&S::Value) -> O,
        G: Fn(&S::Value) -> O,
    {
        let mode = CheckMode::Randomized;
        self.emit_started(label, mode);

        let mut runner = self.runner();
        let outcome = runner.run(&inputs, |input| {
            let expected = reference(&input);
            let actual = candidate(&input);
            if expected == actual {
                Ok(())
            } else {
                Err(TestCaseError::fail(format!(
                    "reference returned {:?}, candidate returned {:?}",
                    expected, actual
                )))
            }
        });

        match outcome {
            Ok(()) => {
                let cases = u64::from(self.config.cases);
                self.emit_passed(label, mode, cases);
                Ok(Verdict::Pass { cases })
            },
            Err(TestError::Fail(reason, input)) => {
                let outputs = panic::catch_unwind(AssertUnwindSafe(|| {
                    (reference(&input), candidate(&input))
                }));
                let (reference, candidate) = outputs.map_err(|_| {
                    OracleError::Panicked(format!("input {:?}: {}", input, reason.message()))
                })?;

                let counterexample = Counterexample {
                    input,
                    reference,
                    candidate,
                };
                self.emit_counterexample(label, mode, &counterexample);
                Ok(Verdict::Fail(counterexample))
            },
            Err(TestError::Abort(reason)) => {
                Err(OracleError::Aborted(reason.message().to_string()))
            },
        }
    }

    /// Exhaustive check over every element of `inputs`.
    ///
    /// The slice is split into contiguous chunks evaluated on
    /// `config.workers` scoped threads. The reported counterexample is the
    /// disagreement with the lowest index, so for an ascending range it is
    /// the smallest failing input.
    ///
    /// # Errors
    /// Returns `WorkerPanicked` if either function panics on a worker.
    pub fn check_exhaustive<I, O, F, G>(
        &self,
        label: &str,
        inputs: &[I],
        reference: F,
        candidate: G,
    ) -> Result<Verdict<I, O>, OracleError>
    where
        I: Clone + Debug + Sync,
        O: PartialEq + Debug + Send,
        F: Fn(&I) -> O + Sync,
        G: Fn(&I) -> O + Sync,
    {
        let mode = CheckMode::Exhaustive;
        self.emit_started(label, mode);

        // Lowest failing index seen so far; workers stop scanning past it
        let cutoff = AtomicUsize::new(usize::MAX);
        let first_failure: Mutex<Option<(usize, O, O)>> = Mutex::new(None);

        if !inputs.is_empty() {
            let workers = self.config.workers.clamp(1, inputs.len());
            let chunk_size = inputs.len().div_ceil(workers);

            crossbeam::thread::scope(|scope| {
                for (chunk_index, chunk) in inputs.chunks(chunk_size).enumerate() {
                    let offset = chunk_index * chunk_size;
                    let (reference, candidate) = (&reference, &candidate);
                    let (cutoff, first_failure) = (&cutoff, &first_failure);

                    scope.spawn(move |_| {
                        tracing::trace!(
                            label,
                            offset,
                            len = chunk.len(),
                            "exhaustive chunk started"
                        );
                        for (position, input) in chunk.iter().enumerate() {
                            let index = offset + position;
                            if index >= cutoff.load(Ordering::Relaxed) {
                                break;
                            }

                            let expected = reference(input);
                            let actual = candidate(input);
                            if expected != actual {
                                let mut slot = first_failure.lock();
                                if slot.as_ref().is_none_or(|(best, _, _)| index < *best) {
                                    *slot = Some((index, expected, actual));
                                    cutoff.fetch_min(index, Ordering::Relaxed);
                                }
                                break;
                            }
                        }
                    });
                }
            })
            .map_err(|_| OracleError::WorkerPanicked)?;
        }

        match first_failure.into_inner() {
            None => {
                let cases = inputs.len() as u64;
                self.emit_passed(label, mode, cases);
                Ok(Verdict::Pass { cases })
            },
            Some((index, reference, candidate)) => {
                let counterexample = Counterexample {
                    input: inputs[index].clone(),
                    reference,
                    candidate,
                };
                self.emit_counterexample(label, mode, &counterexample);
                Ok(Verdict::Fail(counterexample))
            },
        }
    }

    // ========================================================================
    // Kernel Checks
    // ========================================================================

    /// Randomized check of one operation between two kernels, using the
    /// operation's default input strategy.
    ///
    /// Outputs are whole `MathResult`s, so both kernels failing with the same
    /// error kind counts as agreement.
    pub fn check_operation(
        &self,
        operation: Operation,
        reference: &dyn WadKernel,
        candidate: &dyn WadKernel,
    ) -> Result<KernelVerdict, OracleError> {
        let label = kernel_label(operation, reference, candidate);
        self.check(
            &label,
            operation.strategy(),
            |inputs| operation.evaluate(reference, inputs),
            |inputs| operation.evaluate(candidate, inputs),
        )
    }

    /// Exhaustive check of one operation between two kernels over `inputs`.
    pub fn check_operation_exhaustive(
        &self,
        operation: Operation,
        reference: &dyn WadKernel,
        candidate: &dyn WadKernel,
        inputs: &[Inputs],
    ) -> Result<KernelVerdict, OracleError> {
        let label = kernel_label(operation, reference, candidate);
        self.check_exhaustive(
            &label,
            inputs,
            |inputs| operation.evaluate(reference, inputs),
            |inputs| operation.evaluate(candidate, inputs),
        )
    }

    /// Randomized check of every operation, in [`Operation::ALL`] order.
    pub fn check_all_operations(
        &self,
        reference: &dyn WadKernel,
        candidate: &dyn WadKernel,
    ) -> Result<Vec<(Operation, KernelVerdict)>, OracleError> {
        Operation::ALL
            .iter()
            .map(|&operation| {
                self.check_operation(operation, reference, candidate)
                    .map(|verdict| (operation, verdict))
            })
            .collect()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn runner(&self) -> TestRunner {
        let config = self.config.runner_config();
        match &self.config.seed {
            Some(seed) => {
                TestRunner::new_with_rng(config, TestRng::from_seed(RngAlgorithm::ChaCha, seed))
            },
            None => TestRunner::new(config),
        }
    }

    fn emit_started(&self, label: &str, mode: CheckMode) {
        self.observer.on_event(OracleEvent::CheckStarted {
            label: label.to_string(),
            mode,
            timestamp: Utc::now(),
        });
    }

    fn emit_passed(&self, label: &str, mode: CheckMode, cases: u64) {
        self.observer.on_event(OracleEvent::CheckPassed {
            label: label.to_string(),
            mode,
            cases,
            timestamp: Utc::now(),
        });
    }

    fn emit_counterexample<I: Debug, O: Debug>(
        &self,
        label: &str,
        mode: CheckMode,
        counterexample: &Counterexample<I, O>,
    ) {
        self.observer.on_event(OracleEvent::CounterexampleFound {
            label: label.to_string(),
            mode,
            input: format!("{:?}", counterexample.input),
            reference: format!("{:?}", counterexample.reference),
            candidate: format!("{:?}", counterexample.candidate),
            timestamp: Utc::now(),
        });
    }
}

fn kernel_label(
    operation: Operation,
    reference: &dyn WadKernel,
    candidate: &dyn WadKernel,
) -> String {
    format!("{} ({} vs {})", operation, reference.name(), candidate.name())
}

// ============================================================================
// Tests
// ============================================================================
