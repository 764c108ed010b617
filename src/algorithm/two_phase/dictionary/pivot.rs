//! # Basis exchange
//!
//! The pivot operation and the ways of changing the basis by variable numbers that are built on it.
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::data::number_types::tolerance::is_effectively_zero;

impl Dictionary {
    /// Exchange the basic variable of row `row` with the non-basic variable of column `column`.
    ///
    /// With `f = -D[row][column]`, the pivot row is divided by `f` (its own column becomes
    /// `-1 / f`), after which it is substituted into every other row, including the objective row.
    ///
    /// A completely new matrix is computed from the old one before it is swapped in, such that no
    /// value is read after it was written.
    ///
    /// # Arguments
    ///
    /// * `row`: Row of the leaving variable, in range `1..=m`.
    /// * `column`: Column of the entering variable, in range `1..=n`.
    ///
    /// The element `D[row][column]` should not be (effectively) zero. Callers check this before
    /// calling.
    pub fn pivot(&mut self, row: usize, column: usize) {
        debug_assert!((1..=self.nr_basic()).contains(&row));
        debug_assert!((1..=self.nr_non_basic()).contains(&column));
        debug_assert!(!is_effectively_zero(self.coefficients[row][column]));

        let f = -self.coefficients[row][column];
        let pivot_row = self.coefficients[row].iter().enumerate()
            .map(|(l, &value)| if l == column { -1_f64 / f } else { value / f })
            .collect::<Vec<_>>();

        let coefficients = self.coefficients.iter().enumerate()
            .map(|(k, old_row)| {
                if k == row {
                    pivot_row.clone()
                } else {
                    let factor = old_row[column];
                    old_row.iter().zip(&pivot_row).enumerate()
                        .map(|(l, (&value, &new))| {
                            if l == column { factor * new } else { value + factor * new }
                        })
                        .collect()
                }
            })
            .collect();

        self.coefficients = coefficients;
        std::mem::swap(&mut self.basic[row - 1], &mut self.non_basic[column - 1]);

        debug_assert!(self.has_valid_partition());
    }

    /// Pivot using variable numbers instead of indices.
    ///
    /// # Arguments
    ///
    /// * `leaving`: Number of a currently basic variable.
    /// * `entering`: Number of a currently non-basic variable.
    ///
    /// # Return value
    ///
    /// The row and column that were pivoted on. `None` if either variable is not where it should
    /// be, or if the pivot element is zero. In that case, nothing changed.
    pub fn pivot_by_numbers(&mut self, leaving: usize, entering: usize) -> Option<(usize, usize)> {
        let row = self.basic_row(leaving)?;
        let column = self.non_basic_column(entering)?;

        if is_effectively_zero(self.coefficients[row][column]) {
            None
        } else {
            self.pivot(row, column);
            Some((row, column))
        }
    }

    /// Pair the variables that need to change to reach a target basis.
    ///
    /// Every variable of the target basis that is currently non-basic is matched with a currently
    /// basic variable that is not in the target basis. The latter are taken in row order.
    ///
    /// # Return value
    ///
    /// Tuples `(leaving, entering)` of variable numbers.
    pub fn entering_leaving(&self, target_basis: &[usize]) -> Vec<(usize, usize)> {
        let leaving = self.basic.iter()
            .filter(|variable| !target_basis.contains(variable))
            .copied();
        let entering = target_basis.iter()
            .filter(|&&variable| self.is_non_basic(variable))
            .copied();

        leaving.zip(entering).collect()
    }

    /// Change the basis until it consists of the given variables.
    ///
    /// For every variable that needs to enter, a leaving variable that is not in the target basis
    /// is searched for in row order such that the pivot element is not zero. The resulting order
    /// of the rows depends on the previous order; variables that are basic already keep their row.
    ///
    /// # Errors
    ///
    /// If the target is not a set of `m` variables of this dictionary, or when the target basis is
    /// singular. In the latter case, some of the pivots might already have happened.
    pub fn move_to_basis(&mut self, target_basis: &[usize]) -> Result<(), BasisChangeError> {
        let unique = target_basis.iter().collect::<HashSet<_>>();
        if unique.len() != target_basis.len()
            || target_basis.len() != self.nr_basic()
            || !target_basis.iter().all(|&variable| self.contains(variable)) {
            return Err(BasisChangeError::NotABasis(target_basis.to_vec()));
        }

        let entering = target_basis.iter()
            .filter(|&&variable| self.is_non_basic(variable))
            .copied()
            .collect::<Vec<_>>();
        for variable in entering {
            let column = self.non_basic_column(variable).ok_or(BasisChangeError::Singular(variable))?;
            let row = self.rows()
                .filter(|&row| !target_basis.contains(&self.basic_variable(row)))
                .find(|&row| !is_effectively_zero(self.coefficients[row][column]))
                .ok_or(BasisChangeError::Singular(variable))?;

            self.pivot(row, column);
        }

        Ok(())
    }
}

/// A basis change by variable numbers could not be completed.
#[derive(Debug, Eq, PartialEq)]
pub enum BasisChangeError {
    /// The variables don't form a candidate basis for this dictionary.
    NotABasis(Vec<usize>),
    /// No pivot with a nonzero element could be found to bring this variable into the basis.
    Singular(usize),
}

impl Display for BasisChangeError {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            BasisChangeError::NotABasis(variables) => {
                write!(f, "Variables {:?} are not a candidate basis", variables)
            },
            BasisChangeError::Singular(variable) => {
                write!(f, "Variable x{} can not enter the basis: basis is singular", variable)
            },
        }
    }
}

impl Error for BasisChangeError {}
