//! # The dictionary
//!
//! A dictionary expresses the objective function and each basic variable as an affine function of
//! the non-basic variables. It is stored as a dense `(m + 1) x (n + 1)` matrix `D`:
//!
//! * `D[0][0]` is the constant of the objective function, that is, its current value.
//! * `D[0][j]` is the coefficient of the non-basic variable in column `j` in the objective.
//! * `D[i][0]` is the value of the basic variable of row `i` in the current basic solution.
//! * `D[i][j]` is the coefficient of the non-basic variable in column `j` in the expression of the
//! basic variable of row `i`.
//!
//! Rows are indexed `1..=m` and columns `1..=n`, such that index `0` can be used for the objective
//! row and the constant column.
//!
//! Variables are identified by their number. With `n` decision variables and `m` constraints, the
//! decision variables have numbers `1..=n` and the slack variables `n + 1..=n + m`. During the
//! first phase, an auxiliary variable with number `0` is added.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::number_types::tolerance::{is_strictly_negative, is_strictly_positive};

pub mod pivot;
pub mod reconstruction;

/// Number of the auxiliary variable that is introduced in the first phase.
pub const AUXILIARY_VARIABLE: usize = 0;

/// Tableau of the dictionary simplex method.
///
/// The numbers of basic and non-basic variables are fixed for the lifetime of a dictionary. It is
/// only mutated by pivoting.
#[derive(Clone, Debug, PartialEq)]
pub struct Dictionary {
    /// Variable number of the basic variable of row `i + 1`.
    basic: Vec<usize>,
    /// Variable number of the non-basic variable of column `j + 1`.
    non_basic: Vec<usize>,
    /// Row major, `nr_basic + 1` rows of length `nr_non_basic + 1`.
    coefficients: Vec<Vec<f64>>,
}

impl Dictionary {
    /// Create a new dictionary.
    ///
    /// # Arguments
    ///
    /// * `basic`: Variable numbers of the basic variables, in the order of the rows `1..=m`.
    /// * `non_basic`: Variable numbers of the non-basic variables, in the order of the columns
    /// `1..=n`.
    /// * `coefficients`: The matrix `D`, see the module documentation.
    ///
    /// # Panics
    ///
    /// In debug builds, when `coefficients` doesn't have `m + 1` rows of length `n + 1` or when a
    /// variable number appears twice. These are not checked in release builds; a malformed
    /// dictionary then panics on indexing once the rules read it.
    pub fn new(basic: Vec<usize>, non_basic: Vec<usize>, coefficients: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(coefficients.len(), basic.len() + 1);
        debug_assert!(coefficients.iter().all(|row| row.len() == non_basic.len() + 1));

        let dictionary = Self { basic, non_basic, coefficients };
        debug_assert!(dictionary.has_valid_partition());

        dictionary
    }

    /// Whether the current basic solution is feasible.
    ///
    /// That is the case when no basic variable has a negative value.
    pub fn is_feasible(&self) -> bool {
        self.rows().all(|row| !is_strictly_negative(self.constant(row)))
    }

    /// Whether the current basic solution is optimal.
    ///
    /// That is the case when no non-basic variable has a positive coefficient in the objective
    /// function. This is computed from the coefficients each time it is called.
    pub fn is_optimal(&self) -> bool {
        self.columns().all(|column| !is_strictly_positive(self.objective_coefficient(column)))
    }

    /// Row index of a basic variable.
    ///
    /// # Return value
    ///
    /// Index in the range `1..=m` if the variable is basic, `None` otherwise.
    pub fn basic_row(&self, variable: usize) -> Option<usize> {
        self.basic.iter().position(|&v| v == variable).map(|i| i + 1)
    }

    /// Column index of a non-basic variable.
    ///
    /// # Return value
    ///
    /// Index in the range `1..=n` if the variable is non-basic, `None` otherwise.
    pub fn non_basic_column(&self, variable: usize) -> Option<usize> {
        self.non_basic.iter().position(|&v| v == variable).map(|j| j + 1)
    }

    /// Whether the variable is currently basic.
    pub fn is_basic(&self, variable: usize) -> bool {
        self.basic.contains(&variable)
    }

    /// Whether the variable is currently non-basic.
    pub fn is_non_basic(&self, variable: usize) -> bool {
        self.non_basic.contains(&variable)
    }

    /// Whether the variable appears in this dictionary at all.
    pub fn contains(&self, variable: usize) -> bool {
        self.is_basic(variable) || self.is_non_basic(variable)
    }

    /// Whether every variable number appears exactly once in either the basic or the non-basic
    /// variables.
    pub fn has_valid_partition(&self) -> bool {
        let all = self.basic.iter().chain(&self.non_basic).collect::<HashSet<_>>();
        all.len() == self.basic.len() + self.non_basic.len()
    }

    /// Value of each variable in the current basic solution.
    ///
    /// # Return value
    ///
    /// A vector indexed by variable number. Non-basic variables have value zero, as do numbers that
    /// don't appear in the dictionary.
    pub fn basic_solution(&self) -> Vec<f64> {
        let len = self.basic.iter().chain(&self.non_basic).max().map_or(0, |&max| max + 1);
        let mut values = vec![0_f64; len];
        for (i, &variable) in self.basic.iter().enumerate() {
            values[variable] = self.coefficients[i + 1][0];
        }

        values
    }

    /// Current value of the objective function, `D[0][0]`.
    pub fn objective_value(&self) -> f64 {
        self.coefficients[0][0]
    }

    /// Coefficient of the non-basic variable in column `column` in the objective function.
    pub fn objective_coefficient(&self, column: usize) -> f64 {
        debug_assert!((1..=self.nr_non_basic()).contains(&column));

        self.coefficients[0][column]
    }

    /// Value of the basic variable in row `row`.
    pub fn constant(&self, row: usize) -> f64 {
        debug_assert!((1..=self.nr_basic()).contains(&row));

        self.coefficients[row][0]
    }

    /// Value `D[row][column]`, both indices including the objective row and constant column.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        debug_assert!(row <= self.nr_basic());
        debug_assert!(column <= self.nr_non_basic());

        self.coefficients[row][column]
    }

    /// The complete matrix `D`.
    pub fn coefficients(&self) -> &[Vec<f64>] {
        &self.coefficients
    }

    /// Number of the basic variable in row `row`, in range `1..=m`.
    pub fn basic_variable(&self, row: usize) -> usize {
        debug_assert!((1..=self.nr_basic()).contains(&row));

        self.basic[row - 1]
    }

    /// Number of the non-basic variable in column `column`, in range `1..=n`.
    pub fn non_basic_variable(&self, column: usize) -> usize {
        debug_assert!((1..=self.nr_non_basic()).contains(&column));

        self.non_basic[column - 1]
    }

    /// Numbers of the basic variables, in row order.
    pub fn basic_variables(&self) -> &[usize] {
        &self.basic
    }

    /// Numbers of the non-basic variables, in column order.
    pub fn non_basic_variables(&self) -> &[usize] {
        &self.non_basic
    }

    /// Number of basic variables `m`, equal to the number of constraints.
    pub fn nr_basic(&self) -> usize {
        self.basic.len()
    }

    /// Number of non-basic variables `n`.
    pub fn nr_non_basic(&self) -> usize {
        self.non_basic.len()
    }

    /// Row indices `1..=m`.
    pub fn rows(&self) -> impl Iterator<Item = usize> + use<> {
        1..=self.nr_basic()
    }

    /// Column indices `1..=n`.
    pub fn columns(&self) -> impl Iterator<Item = usize> + use<> {
        1..=self.nr_non_basic()
    }

    /// Create a copy without the given constraint row.
    ///
    /// Used when the basic variable of that row is identically zero and the row carries no
    /// information.
    pub fn without_row(&self, row: usize) -> Self {
        debug_assert!((1..=self.nr_basic()).contains(&row));

        let mut basic = self.basic.clone();
        basic.remove(row - 1);
        let mut coefficients = self.coefficients.clone();
        coefficients.remove(row);

        Self::new(basic, self.non_basic.clone(), coefficients)
    }

    /// Create a copy without the given non-basic column.
    pub fn without_column(&self, column: usize) -> Self {
        debug_assert!((1..=self.nr_non_basic()).contains(&column));

        let mut non_basic = self.non_basic.clone();
        non_basic.remove(column - 1);
        let coefficients = self.coefficients.iter()
            .map(|row| {
                row.iter().enumerate()
                    .filter(|&(j, _)| j != column)
                    .map(|(_, &value)| value)
                    .collect()
            })
            .collect();

        Self::new(self.basic.clone(), non_basic, coefficients)
    }
}

/// Name of a variable in the textual representation.
fn name(variable: usize) -> String {
    format!("x{}", variable)
}

/// Render a value without trailing zeros.
fn format_value(value: f64) -> String {
    // Avoid printing "-0"
    let value = if value == 0_f64 { 0_f64 } else { value };
    let text = format!("{:.6}", value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

impl Display for Dictionary {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let names = self.basic.iter().map(|&v| name(v)).collect::<Vec<_>>();
        let width = names.iter().map(String::len).max().unwrap_or(0).max("z".len());

        let labels = names.iter().map(String::as_str).chain(std::iter::once("z"));
        let rows = (1..=self.nr_basic()).chain(std::iter::once(0));
        for (label, row) in labels.zip(rows) {
            let terms = self.columns()
                .map(|column| {
                    let value = self.coefficients[row][column];
                    let sign = if value < 0_f64 { '-' } else { '+' };
                    format!("{} {}{}", sign, format_value(value.abs()), name(self.non_basic_variable(column)))
                })
                .join(" ");
            writeln!(
                f, "{:<width$} = {} {}", label, format_value(self.coefficients[row][0]), terms,
                width = width,
            )?;
        }

        Ok(())
    }
}
