//! Infeasible problem: `x1 <= 1` and `x1 >= 2`.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::StandardForm;

pub const PROBLEM_LITERAL_STRING: &str = "\
1 2
1 1
-1 -2
1
";

pub fn standard_form() -> StandardForm {
    StandardForm::new(
        DenseMatrix::from_data(vec![vec![1_f64], vec![-1_f64]]),
        vec![1_f64, -2_f64],
        vec![1_f64],
        0_f64,
    )
}
