// ============================================================================
// Oracle Operations
// Named kernel operations and their input tuples
// ============================================================================

use super::strategy;
use crate::interfaces::WadKernel;
use crate::numeric::{MathError, MathResult, U256};
use proptest::prelude::*;
use std::fmt;
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A kernel operation the oracle can compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    MulDivDown,
    MulDivUp,
    DivWadDown,
    DivWadUp,
    Isqrt,
}

impl Operation {
    /// Every operation of the kernel interface.
    pub const ALL: [Operation; 5] = [
        Operation::MulDivDown,
        Operation::MulDivUp,
        Operation::DivWadDown,
        Operation::DivWadUp,
        Operation::Isqrt,
    ];

    /// Snake-case name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::MulDivDown => "mul_div_down",
            Operation::MulDivUp => "mul_div_up",
            Operation::DivWadDown => "div_wad_down",
            Operation::DivWadUp => "div_wad_up",
            Operation::Isqrt => "isqrt",
        }
    }

    /// Number of `U256` arguments.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Isqrt => 1,
            _ => 2,
        }
    }

    /// Run this operation on `kernel`.
    ///
    /// `isqrt` is total, so its result is always `Ok`. Inputs of the wrong
    /// arity yield `InvalidInput` for every kernel alike.
    pub fn evaluate(&self, kernel: &dyn WadKernel, inputs: &Inputs) -> MathResult<U256> {
        match (self, *inputs) {
            (Operation::MulDivDown, Inputs::Binary(x, y)) => kernel.mul_div_down(x, y),
            (Operation::MulDivUp, Inputs::Binary(x, y)) => kernel.mul_div_up(x, y),
            (Operation::DivWadDown, Inputs::Binary(x, y)) => kernel.div_wad_down(x, y),
            (Operation::DivWadUp, Inputs::Binary(x, y)) => kernel.div_wad_up(x, y),
            (Operation::Isqrt, Inputs::Unary(x)) => Ok(kernel.isqrt(x)),
            _ => Err(MathError::InvalidInput),
        }
    }

    /// Default input generator for this operation.
    pub fn strategy(&self) -> BoxedStrategy<Inputs> {
        match self.arity() {
            1 => strategy::u256().prop_map(Inputs::Unary).boxed(),
            _ => strategy::u256_pair()
                .prop_map(|(x, y)| Inputs::Binary(x, y))
                .boxed(),
        }
    }

    /// Exhaustive input set built from [`strategy::boundary_values`]:
    /// every value for unary operations, every ordered pair for binary ones.
    pub fn boundary_inputs(&self) -> Vec<Inputs> {
        let values = strategy::boundary_values();
        match self.arity() {
            1 => Inputs::unary_values(&values),
            _ => Inputs::binary_grid(&values, &values),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arguments for one operation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Inputs {
    Unary(U256),
    Binary(U256, U256),
}

impl Inputs {
    /// Every integer of `range` as a unary input.
    pub fn unary_range(range: RangeInclusive<u64>) -> Vec<Inputs> {
        range.map(|x| Inputs::Unary(U256::from(x))).collect()
    }

    /// Each value as a unary input.
    pub fn unary_values(values: &[U256]) -> Vec<Inputs> {
        values.iter().copied().map(Inputs::Unary).collect()
    }

    /// Cartesian product `xs × ys`, `x`-major.
    pub fn binary_grid(xs: &[U256], ys: &[U256]) -> Vec<Inputs> {
        xs.iter()
            .flat_map(|&x| ys.iter().map(move |&y| Inputs::Binary(x, y)))
            .collect()
    }
}

impl fmt::Display for Inputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inputs::Unary(x) => write!(f, "x = {}", x),
            Inputs::Binary(x, y) => write!(f, "x = {}, y = {}", x, y),
        }
    }
}
