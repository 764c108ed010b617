//! # Representing linear programs
//!
//! Problems are read in standard form: maximize `c x + c_0` subject to `A x <= b`, `x >= 0`. The
//! decision variables are numbered `1..=n`, the slack variables of the constraints `n + 1..=n + m`.
use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::algorithm::two_phase::dictionary::reconstruction::ReconstructionError;
use crate::data::linear_algebra::matrix::DenseMatrix;

pub mod solution;

/// A linear program in standard form with inequality constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm {
    /// Coefficients `A` of the decision variables, size `m x n`.
    constraints: DenseMatrix,
    /// Right-hand side `b`, length `m`.
    b: Vec<f64>,
    /// Objective coefficients `c`, length `n`.
    cost: Vec<f64>,
    cost_constant: f64,
}

impl StandardForm {
    /// Create a new problem.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Constraint matrix `A` with a row for each constraint.
    /// * `b`: Right-hand side with a value for each constraint.
    /// * `cost`: Objective coefficient of each decision variable.
    /// * `cost_constant`: Constant term of the objective function.
    pub fn new(constraints: DenseMatrix, b: Vec<f64>, cost: Vec<f64>, cost_constant: f64) -> Self {
        debug_assert_eq!(constraints.nr_rows(), b.len());
        debug_assert!(constraints.nr_rows() == 0 || constraints.nr_columns() == cost.len());

        Self { constraints, b, cost, cost_constant }
    }

    /// The dictionary with all slack variables basic.
    ///
    /// Every constraint `a_i x <= b_i` becomes `x_{n + i} = b_i - a_i x`. This dictionary is feasible
    /// iff `b >= 0`.
    pub fn initial_dictionary(&self) -> Dictionary {
        let n = self.nr_variables();
        let m = self.nr_constraints();

        let objective_row = std::iter::once(self.cost_constant)
            .chain(self.cost.iter().copied())
            .collect();
        let constraint_rows = (0..m).map(|i| {
            std::iter::once(self.b[i])
                .chain(self.constraints.row(i).iter().map(|value| -value))
                .collect()
        });
        let coefficients = std::iter::once(objective_row).chain(constraint_rows).collect();

        Dictionary::new((n + 1..=n + m).collect(), (1..=n).collect(), coefficients)
    }

    /// The constraint matrix `[A I]` including a column for every slack variable.
    pub fn constraint_matrix_with_slacks(&self) -> DenseMatrix {
        let m = self.nr_constraints();
        let data = (0..m)
            .map(|i| {
                self.constraints.row(i).iter().copied()
                    .chain((0..m).map(|k| if k == i { 1_f64 } else { 0_f64 }))
                    .collect()
            })
            .collect();

        DenseMatrix::from_data(data)
    }

    /// Compute the dictionary of a basis directly.
    ///
    /// See `Dictionary::from_basis`; the slack variables have zero cost.
    pub fn dictionary_for_basis(&self, basis: &[usize]) -> Result<Dictionary, ReconstructionError> {
        let cost = self.cost.iter().copied()
            .chain(std::iter::repeat(0_f64).take(self.nr_constraints()))
            .collect::<Vec<_>>();

        Dictionary::from_basis(
            &self.constraint_matrix_with_slacks(),
            &self.b,
            &cost,
            self.cost_constant,
            basis,
        )
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }

    /// Constraint coefficients of the decision variables.
    pub fn constraints(&self) -> &DenseMatrix {
        &self.constraints
    }

    /// Right-hand side of the constraints.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Objective coefficients of the decision variables.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// Constant of the objective function.
    pub fn cost_constant(&self) -> f64 {
        self.cost_constant
    }
}
