//! # Problems shared by the tests inside the crate.
//!
//! Convention for function names:
//!
//! * `const PROBLEM_LITERAL_STRING`
//! * `fn standard_form()`
//! * `fn dictionary()`
//! * `fn auxiliary_dictionary()`
//! * `fn optimal_dictionary()`
use approx::abs_diff_eq;

use crate::algorithm::two_phase::dictionary::Dictionary;

pub mod problem_4;

/// Compare all coefficients of two dictionaries of the same shape, up to rounding errors.
pub fn assert_coefficients_eq(actual: &Dictionary, expected: &Dictionary) {
    assert_eq!(actual.nr_basic(), expected.nr_basic());
    assert_eq!(actual.nr_non_basic(), expected.nr_non_basic());

    for row in 0..=expected.nr_basic() {
        for column in 0..=expected.nr_non_basic() {
            let (left, right) = (actual.get(row, column), expected.get(row, column));
            assert!(
                abs_diff_eq!(left, right, epsilon = 1e-9),
                "coefficient ({}, {}) is {}, expected {}\n{}", row, column, left, right, actual,
            );
        }
    }
}
