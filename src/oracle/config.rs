// ============================================================================
// Oracle Configuration
// How many inputs to explore, how hard to shrink, and with what seed
// ============================================================================

use proptest::test_runner::Config as ProptestConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for an `EquivalenceOracle`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OracleConfig {
    /// Number of generated inputs per randomized check
    pub cases: u32,

    /// Upper bound on shrinking steps once a failing input is found
    pub max_shrink_iters: u32,

    /// Optional: Fixed 32-byte seed for reproducible randomized checks
    /// None means a fresh random seed per check
    pub seed: Option<[u8; 32]>,

    /// Worker threads for exhaustive checks
    pub workers: usize,
}

impl OracleConfig {
    /// Cases per randomized check when nothing else is configured
    pub const DEFAULT_CASES: u32 = 1024;

    /// Shrink budget when nothing else is configured
    pub const DEFAULT_MAX_SHRINK_ITERS: u32 = 4096;

    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            cases: Self::DEFAULT_CASES,
            max_shrink_iters: Self::DEFAULT_MAX_SHRINK_ITERS,
            seed: None,
            workers: default_workers(),
        }
    }

    /// Builder method: Set number of randomized cases
    pub fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Builder method: Set shrink budget
    pub fn with_max_shrink_iters(mut self, iters: u32) -> Self {
        self.max_shrink_iters = iters;
        self
    }

    /// Builder method: Fix the random seed
    pub fn with_seed(mut self, seed: [u8; 32]) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: Set exhaustive worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cases == 0 {
            return Err("Number of cases must be positive".to_string());
        }

        if self.workers == 0 {
            return Err("Worker count must be positive".to_string());
        }

        Ok(())
    }

    /// proptest runner configuration for randomized checks.
    ///
    /// Failure persistence is disabled: the oracle reports counterexamples
    /// itself and never writes regression files.
    pub fn runner_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            failure_persistence: None,
            ..ProptestConfig::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields take default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl OracleConfig {
    /// Fast smoke check
    /// - 256 cases
    /// - Small shrink budget
    pub fn quick() -> Self {
        Self::new().with_cases(256).with_max_shrink_iters(512)
    }

    /// Release-gate check
    /// - 100,000 cases
    pub fn thorough() -> Self {
        Self::new().with_cases(100_000)
    }

    /// Reproducible check
    /// - Default case count
    /// - Fixed seed, so reruns explore the same inputs
    pub fn deterministic(seed: [u8; 32]) -> Self {
        Self::new().with_seed(seed)
    }
}
