//! # Representation of feasible solutions
//!
//! Once a linear program is solved, the values of all variables are read from the final
//! dictionary.
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A basic feasible solution of a linear program.
///
/// Contains a value for every variable number, including the slack variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Value of the objective function for this solution, including its constant.
    objective_value: f64,
    /// Indexed by variable number. Index `0` belongs to the auxiliary variable, which is zero in
    /// any solution of the original problem.
    values: Vec<f64>,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: f64, values: Vec<f64>) -> Self {
        Self { objective_value, values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Value of a variable. Variables that are unknown to this solution have value zero.
    pub fn value(&self, variable: usize) -> f64 {
        self.values.get(variable).copied().unwrap_or(0_f64)
    }

    /// All values, indexed by variable number.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        for (variable, value) in self.values.iter().enumerate().skip(1) {
            writeln!(f, "x{} = {}", variable, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn values() {
        let solution = Solution::new(27_f64, vec![0_f64, 3_f64, 5_f64, 3_f64, 0_f64, 0_f64]);
        assert_eq!(solution.objective_value(), 27_f64);
        assert_eq!(solution.value(2), 5_f64);
        assert_eq!(solution.value(9), 0_f64);
        assert_eq!(solution.values().len(), 6);
    }

    #[test]
    fn display() {
        let solution = Solution::new(4.5_f64, vec![0_f64, 1.5_f64, 0_f64]);
        assert_eq!(solution.to_string(), "Objective value: 4.5\nx1 = 1.5\nx2 = 0\n");
    }
}
