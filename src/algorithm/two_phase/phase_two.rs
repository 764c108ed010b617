//! # Phase two: optimizing
//!
//! Once a feasible dictionary is known, the objective function of the problem is restored and the
//! simplex method is applied until the dictionary is optimal or shown to be unbounded.
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::dictionary::{AUXILIARY_VARIABLE, Dictionary};
use crate::algorithm::two_phase::phase_one::Rank;
use crate::algorithm::two_phase::solver::{Solver, StepError, Termination};
use crate::data::linear_program::solution::Solution;

/// Objective function of a problem, independent of any basis.
///
/// It is remembered before the first phase replaces it by the auxiliary objective.
#[derive(Clone, Debug, PartialEq)]
pub struct Objective {
    constant: f64,
    /// Variable numbers with their coefficient.
    coefficients: Vec<(usize, f64)>,
}

impl Objective {
    /// Read the objective function from the top row of a dictionary.
    pub fn of(dictionary: &Dictionary) -> Self {
        Self {
            constant: dictionary.objective_value(),
            coefficients: dictionary.columns()
                .map(|column| {
                    (dictionary.non_basic_variable(column), dictionary.objective_coefficient(column))
                })
                .collect(),
        }
    }

    /// Turn the final dictionary of the first phase into the first dictionary of the second phase.
    ///
    /// The auxiliary variable is removed and the objective row is expressed in the current
    /// non-basic variables by substituting the rows of the basic ones.
    ///
    /// # Arguments
    ///
    /// * `auxiliary`: Optimal auxiliary dictionary with objective value zero.
    /// * `rank`: Whether the auxiliary variable is still basic, and if so, in which row.
    pub fn initial_dictionary(&self, auxiliary: &Dictionary, rank: Rank) -> Dictionary {
        let reduced = match rank {
            Rank::Full => {
                let column = auxiliary.non_basic_column(AUXILIARY_VARIABLE);
                debug_assert!(column.is_some());
                match column {
                    Some(column) => auxiliary.without_column(column),
                    None => auxiliary.clone(),
                }
            },
            Rank::Deficient(row) => {
                debug_assert_eq!(auxiliary.basic_variable(row), AUXILIARY_VARIABLE);
                debug!("Removing redundant row {}", row);
                auxiliary.without_row(row)
            },
        };
        debug_assert!(!reduced.contains(AUXILIARY_VARIABLE));

        let mut objective = vec![0_f64; reduced.nr_non_basic() + 1];
        objective[0] = self.constant;
        for &(variable, coefficient) in &self.coefficients {
            if let Some(row) = reduced.basic_row(variable) {
                for (total, value) in objective.iter_mut().zip(&reduced.coefficients()[row]) {
                    *total += coefficient * value;
                }
            } else if let Some(column) = reduced.non_basic_column(variable) {
                objective[column] += coefficient;
            }
        }

        let mut coefficients = reduced.coefficients().to_vec();
        coefficients[0] = objective;

        Dictionary::new(
            reduced.basic_variables().to_vec(),
            reduced.non_basic_variables().to_vec(),
            coefficients,
        )
    }
}

/// Maximizes the objective of a feasible dictionary.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal(solver: &mut Solver) -> Result<OptimizationResult, StepError> {
    debug_assert!(solver.dictionary().is_feasible());

    Ok(match solver.run()? {
        Termination::Optimal => {
            let dictionary = solver.dictionary();
            OptimizationResult::FiniteOptimum(Solution::new(
                dictionary.objective_value(),
                dictionary.basic_solution(),
            ))
        },
        Termination::Unbounded => OptimizationResult::Unbounded,
    })
}
