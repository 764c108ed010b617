//! # Numerical tolerance
//!
//! Helper methods for the accuracy of floating point calculations. All sign and degeneracy tests
//! of the simplex method go through these predicates, such that values that are zero up to
//! rounding are never used as a pivot or mistaken for an improving direction.
use num_traits::Float;

/// Values with an absolute value below this constant are considered to be zero.
pub const EPSILON: f64 = 1e-12;

fn epsilon<F: Float>() -> F {
    F::from(EPSILON).unwrap_or_else(F::epsilon)
}

/// Whether a value is zero up to the tolerance `EPSILON`.
///
/// This is the case iff `-EPSILON < value < EPSILON`.
pub fn is_effectively_zero<F: Float>(value: F) -> bool {
    value.abs() < epsilon()
}

/// Whether a value is positive and can not be confused with zero.
pub fn is_strictly_positive<F: Float>(value: F) -> bool {
    value >= epsilon()
}

/// Whether a value is negative and can not be confused with zero.
pub fn is_strictly_negative<F: Float>(value: F) -> bool {
    value <= -epsilon::<F>()
}
