//! # Dictionaries from an explicit basis
//!
//! Instead of pivoting towards a basis, the dictionary belonging to a basis can be computed
//! directly from the constraint matrix of the problem using the inverse of the basis matrix.
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::data::linear_algebra::matrix::{DenseMatrix, dot, SingularMatrix};

impl Dictionary {
    /// Compute the dictionary of a basis.
    ///
    /// The problem is `max c x + c_0` subject to `A x = b`, `x >= 0`, where the variable with
    /// number `j` belongs to column `j - 1` of `A`. For problems with inequality constraints, `A`
    /// should include the slack columns.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Matrix `A` of size `m x N`.
    /// * `b`: Right-hand side of length `m`.
    /// * `cost`: Objective coefficients `c` of length `N`.
    /// * `cost_constant`: Objective constant `c_0`.
    /// * `basis`: The `m` basic variable numbers. The basic variable of row `i` is `basis[i - 1]`.
    ///
    /// # Return value
    ///
    /// A dictionary with the non-basic variables in ascending order. It is not necessarily
    /// feasible or optimal.
    pub fn from_basis(
        constraints: &DenseMatrix,
        b: &[f64],
        cost: &[f64],
        cost_constant: f64,
        basis: &[usize],
    ) -> Result<Self, ReconstructionError> {
        let nr_rows = constraints.nr_rows();
        let nr_variables = constraints.nr_columns();
        if b.len() != nr_rows || cost.len() != nr_variables {
            return Err(ReconstructionError::DimensionMismatch);
        }
        if basis.len() != nr_rows {
            return Err(ReconstructionError::BasisSize { expected: nr_rows, actual: basis.len() });
        }
        if let Some(&variable) = basis.iter().find(|&&v| v == 0 || v > nr_variables) {
            return Err(ReconstructionError::UnknownVariable(variable));
        }
        let mut seen = HashSet::with_capacity(basis.len());
        if let Some(&variable) = basis.iter().find(|&&v| !seen.insert(v)) {
            return Err(ReconstructionError::DuplicateVariable(variable));
        }

        let columns = basis.iter().map(|v| v - 1).collect::<Vec<_>>();
        let inverse = constraints.select_columns(&columns).inverse()?;

        let constants = inverse.right_product(b);
        let basis_cost = basis.iter().map(|v| cost[v - 1]).collect::<Vec<_>>();
        let prices = inverse.left_product(&basis_cost);

        let non_basic = (1..=nr_variables).filter(|v| !basis.contains(v)).collect::<Vec<_>>();

        let mut coefficients = vec![vec![0_f64; non_basic.len() + 1]; nr_rows + 1];
        coefficients[0][0] = cost_constant + dot(&basis_cost, &constants);
        for (i, constant) in constants.into_iter().enumerate() {
            coefficients[i + 1][0] = constant;
        }
        for (j, &variable) in non_basic.iter().enumerate() {
            let column = constraints.column(variable - 1);
            coefficients[0][j + 1] = cost[variable - 1] - dot(&prices, &column);
            for (i, value) in inverse.right_product(&column).into_iter().enumerate() {
                coefficients[i + 1][j + 1] = -value;
            }
        }

        Ok(Self::new(basis.to_vec(), non_basic, coefficients))
    }

    /// Columns of variables in the constraint system of this dictionary.
    ///
    /// The system reads `x_B - D_N x_N = D_0`, with `D_N` the coefficients of the non-basic
    /// variables and `D_0` the constant column. A non-basic variable at column `j` thus has column
    /// `-D[.][j]`, a basic variable the unit vector of its row.
    ///
    /// # Return value
    ///
    /// A matrix with `m` rows and a column for each of the variables. `None` if one of the
    /// variables doesn't appear in this dictionary.
    pub fn basis_matrix(&self, variables: &[usize]) -> Option<DenseMatrix> {
        let mut matrix = DenseMatrix::zeros(self.nr_basic(), variables.len());
        for (k, &variable) in variables.iter().enumerate() {
            if let Some(row) = self.basic_row(variable) {
                matrix.set_value(row - 1, k, 1_f64);
            } else {
                let column = self.non_basic_column(variable)?;
                for row in self.rows() {
                    matrix.set_value(row - 1, k, -self.coefficients[row][column]);
                }
            }
        }

        Some(matrix)
    }
}

/// A dictionary can't be computed for the provided basis.
#[derive(Debug, Eq, PartialEq)]
pub enum ReconstructionError {
    /// The vectors don't match the dimensions of the constraint matrix.
    DimensionMismatch,
    /// The basis should have exactly one variable per constraint.
    BasisSize {
        /// Number of constraints.
        expected: usize,
        /// Number of variables provided.
        actual: usize,
    },
    /// The variable number doesn't correspond to a column of the constraint matrix.
    UnknownVariable(usize),
    /// The variable appears twice in the basis.
    DuplicateVariable(usize),
    /// The columns of the basis are linearly dependent.
    Singular(SingularMatrix),
}

impl Display for ReconstructionError {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            ReconstructionError::DimensionMismatch => {
                f.write_str("Right-hand side or cost vector doesn't match the constraint matrix")
            },
            ReconstructionError::BasisSize { expected, actual } => {
                write!(f, "Basis should contain {} variables, but contains {}", expected, actual)
            },
            ReconstructionError::UnknownVariable(variable) => {
                write!(f, "Variable x{} is not a variable of the problem", variable)
            },
            ReconstructionError::DuplicateVariable(variable) => {
                write!(f, "Variable x{} appears more than once in the basis", variable)
            },
            ReconstructionError::Singular(error) => write!(f, "Basis is not valid: {}", error),
        }
    }
}

impl Error for ReconstructionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReconstructionError::Singular(error) => Some(error),
            _ => None,
        }
    }
}

impl From<SingularMatrix> for ReconstructionError {
    fn from(error: SingularMatrix) -> Self {
        ReconstructionError::Singular(error)
    }
}
