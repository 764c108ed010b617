//! # Phase one: finding a feasible dictionary
//!
//! An auxiliary variable `x0` is subtracted from every constraint that is violated by the slack
//! basis, and `-x0` is maximized. After one pivot bringing `x0` into the basis, the auxiliary
//! dictionary is feasible and the simplex method can be applied to it. The original problem is
//! feasible iff `x0` can be brought to zero.
use std::iter::once;

use log::{debug, info, warn};

use crate::algorithm::two_phase::dictionary::{AUXILIARY_VARIABLE, Dictionary};
use crate::algorithm::two_phase::solver::{PivotOrigin, Solver, StepError, Termination};
use crate::data::number_types::tolerance::{is_effectively_zero, is_strictly_negative};

/// Build the auxiliary dictionary of the first phase.
///
/// The auxiliary variable gets the last column. It has coefficient `1` in every row with a
/// negative constant and the objective is `-x0`.
pub fn auxiliary_dictionary(dictionary: &Dictionary) -> Dictionary {
    debug_assert!(!dictionary.contains(AUXILIARY_VARIABLE));

    let non_basic = dictionary.non_basic_variables().iter().copied()
        .chain(once(AUXILIARY_VARIABLE))
        .collect();

    let width = dictionary.nr_non_basic() + 2;
    let mut objective = vec![0_f64; width];
    objective[width - 1] = -1_f64;
    let rows = dictionary.coefficients()[1..].iter()
        .map(|row| {
            let auxiliary = if is_strictly_negative(row[0]) { 1_f64 } else { 0_f64 };
            row.iter().copied().chain(once(auxiliary)).collect::<Vec<_>>()
        });
    let coefficients = once(objective).chain(rows).collect();

    Dictionary::new(dictionary.basic_variables().to_vec(), non_basic, coefficients)
}

/// Row at which the auxiliary variable should enter the basis to make the dictionary feasible.
///
/// # Return value
///
/// The first row with the most negative constant, or `None` if the dictionary is feasible.
pub fn feasibility_pivot_row(dictionary: &Dictionary) -> Option<usize> {
    dictionary.rows()
        .map(|row| (row, dictionary.constant(row)))
        .filter(|&(_, constant)| is_strictly_negative(constant))
        .min_by(|(_, left), (_, right)| left.total_cmp(right))
        .map(|(row, _)| row)
}

/// Reduces the auxiliary objective to zero, if possible.
///
/// # Arguments
///
/// * `solver`: Session on the dictionary built by `auxiliary_dictionary`.
///
/// # Return value
///
/// Whether the original problem is feasible. If it is, the auxiliary variable is non-basic or its
/// row is redundant.
pub(crate) fn primal(solver: &mut Solver) -> Result<FeasibilityResult, StepError> {
    let column = solver.dictionary().nr_non_basic();
    debug_assert_eq!(solver.dictionary().non_basic_variable(column), AUXILIARY_VARIABLE);

    if let Some(row) = feasibility_pivot_row(solver.dictionary()) {
        solver.apply(row, column, PivotOrigin::Feasibility);
    }
    debug_assert!(solver.dictionary().is_feasible());

    match solver.run()? {
        Termination::Optimal => {},
        Termination::Unbounded => {
            // -x0 is bounded by zero, only rounding errors get here
            warn!("Auxiliary objective appears unbounded, treating the problem as infeasible");
            return Ok(FeasibilityResult::Infeasible);
        },
    }

    let value = solver.dictionary().objective_value();
    if !is_effectively_zero(value) {
        info!("Auxiliary objective has optimal value {}, problem is infeasible", value);
        return Ok(FeasibilityResult::Infeasible);
    }

    Ok(FeasibilityResult::Feasible(remove_auxiliary_basis_variable(solver)))
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FeasibilityResult {
    /// The final auxiliary dictionary can be turned into a dictionary for the original problem.
    Feasible(Rank),
    /// The problem is not feasible.
    Infeasible,
}

/// The constraints either have full rank, or one of the rows is redundant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rank {
    /// The auxiliary variable is non-basic.
    Full,
    /// The auxiliary variable is basic in this row, and all coefficients of the row are zero. It
    /// can be removed.
    Deficient(usize),
}

/// Pivots the auxiliary variable out of the basis "at zero level", without change of the value of
/// the current solution.
///
/// # Return value
///
/// The rank, which is deficient if no column has a nonzero coefficient in the row of the auxiliary
/// variable.
fn remove_auxiliary_basis_variable(solver: &mut Solver) -> Rank {
    let dictionary = solver.dictionary();
    match dictionary.basic_row(AUXILIARY_VARIABLE) {
        None => Rank::Full,
        Some(row) => {
            let column = dictionary.columns()
                .find(|&column| !is_effectively_zero(dictionary.get(row, column)));

            match column {
                Some(column) => {
                    debug!("Auxiliary variable is basic at zero level, pivoting it out");
                    solver.apply(row, column, PivotOrigin::Feasibility);
                    Rank::Full
                },
                None => {
                    debug!("Row {} of the auxiliary variable is redundant", row);
                    Rank::Deficient(row)
                },
            }
        },
    }
}
