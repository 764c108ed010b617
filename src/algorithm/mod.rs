//! # Algorithms
use crate::algorithm::two_phase::solver::{Configuration, StepError};
use crate::algorithm::two_phase::TwoPhase;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::StandardForm;

pub mod two_phase;

/// A problem formulation that can be solved.
pub trait Solve {
    /// Solve this problem from its initial dictionary.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    fn solve(&self, configuration: Configuration) -> Result<OptimizationResult, StepError>;
}

impl Solve for StandardForm {
    fn solve(&self, configuration: Configuration) -> Result<OptimizationResult, StepError> {
        TwoPhase::new(configuration)
            .solve(self.initial_dictionary())
            .map(|outcome| outcome.result)
    }
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum OptimizationResult {
    Infeasible,
    FiniteOptimum(Solution),
    Unbounded,
}
