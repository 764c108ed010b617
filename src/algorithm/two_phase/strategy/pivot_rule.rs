//! # Pivot rules
//!
//! Strategies for moving from dictionary to dictionary: which non-basic variable enters the basis,
//! and which basic variable leaves it.
//!
//! The rules only read the dictionary. They are selected at runtime through `EnteringMethod` and
//! the Bland's rule flag of the solver configuration.
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::data::number_types::tolerance::{is_effectively_zero, is_strictly_negative, is_strictly_positive};

/// Outcome of selecting an entering column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Entering {
    /// Index of the column of the entering variable, in range `1..=n`.
    Column(usize),
    /// No column improves the objective: the dictionary is optimal.
    Optimal,
    /// Some improving column is not bounded by any row.
    Unbounded,
}

/// Deciding which variable enters the basis.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The entering rule describes that behavior. Only columns with a positive objective
/// coefficient are candidates.
pub trait EnteringRule {
    /// Column selection rule for the primal Simplex method.
    fn select_entering_column(&self, dictionary: &Dictionary) -> Entering;
}

/// Deciding which variable leaves the basis, once the entering column is known.
pub trait LeavingRule {
    /// Row selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `dictionary`: Dictionary in a basic feasible solution state.
    /// * `column`: Column of the entering variable. It should have a positive objective
    /// coefficient.
    ///
    /// # Return value
    ///
    /// The row of the leaving variable. `None` if no row bounds the increase of the entering
    /// variable.
    fn select_leaving_row(&self, dictionary: &Dictionary, column: usize) -> Option<usize>;
}

/// Columns with a positive objective coefficient, together with that coefficient.
fn improving_columns(dictionary: &Dictionary) -> impl Iterator<Item = (usize, f64)> + '_ {
    dictionary.columns()
        .map(move |column| (column, dictionary.objective_coefficient(column)))
        .filter(|&(_, coefficient)| is_strictly_positive(coefficient))
}

/// Rows bounding the increase of the variable in the column, together with that bound.
fn bounding_rows(dictionary: &Dictionary, column: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
    dictionary.rows()
        .filter(move |&row| is_strictly_negative(dictionary.get(row, column)))
        .map(move |row| (row, -dictionary.constant(row) / dictionary.get(row, column)))
}

/// Minimum ratio test.
///
/// The basic variable of row `i` limits the increase of the entering variable to
/// `-D[i][0] / D[i][column]` when `D[i][column]` is negative.
///
/// # Return value
///
/// The first row attaining the smallest bound, and that bound. `None` if no row bounds the
/// entering variable.
pub fn min_ratio(dictionary: &Dictionary, column: usize) -> Option<(usize, f64)> {
    bounding_rows(dictionary, column)
        .fold(None, |best, (row, ratio)| match best {
            Some((_, best_ratio)) if best_ratio <= ratio => best,
            _ => Some((row, ratio)),
        })
}

/// Simply pivot on the first column which has a positive objective coefficient.
pub struct FirstProfitable;
impl EnteringRule for FirstProfitable {
    fn select_entering_column(&self, dictionary: &Dictionary) -> Entering {
        improving_columns(dictionary).next()
            .map_or(Entering::Optimal, |(column, _)| Entering::Column(column))
    }
}

/// Pivot on the column with the largest objective coefficient.
///
/// On a tie, the first of those columns is used.
pub struct GreatestCoefficient;
impl EnteringRule for GreatestCoefficient {
    fn select_entering_column(&self, dictionary: &Dictionary) -> Entering {
        let mut greatest: Option<(usize, f64)> = None;
        for (column, coefficient) in improving_columns(dictionary) {
            match greatest {
                Some((_, existing)) if existing >= coefficient => {},
                _ => greatest = Some((column, coefficient)),
            }
        }

        greatest.map_or(Entering::Optimal, |(column, _)| Entering::Column(column))
    }
}

/// Pivot on the column which increases the objective function the most in this step.
///
/// The increase is the objective coefficient times the minimum ratio of the column. If any
/// improving column is not bounded, the problem is unbounded and no other column needs to be
/// considered.
pub struct MostAdvantageous;
impl EnteringRule for MostAdvantageous {
    fn select_entering_column(&self, dictionary: &Dictionary) -> Entering {
        let mut best: Option<(usize, f64)> = None;
        for (column, coefficient) in improving_columns(dictionary) {
            let increase = match min_ratio(dictionary, column) {
                Some((_, ratio)) => coefficient * ratio,
                None => return Entering::Unbounded,
            };

            match best {
                Some((_, existing)) if existing >= increase => {},
                _ => best = Some((column, increase)),
            }
        }

        best.map_or(Entering::Optimal, |(column, _)| Entering::Column(column))
    }
}

/// Bland's rule for the entering variable: the improving variable with the smallest number.
///
/// Note that the variable number is used, not the column index.
pub struct SmallestNumber;
impl EnteringRule for SmallestNumber {
    fn select_entering_column(&self, dictionary: &Dictionary) -> Entering {
        improving_columns(dictionary)
            .min_by_key(|&(column, _)| dictionary.non_basic_variable(column))
            .map_or(Entering::Optimal, |(column, _)| Entering::Column(column))
    }
}

/// Take the first row attaining the minimum ratio.
pub struct MinimumRatio;
impl LeavingRule for MinimumRatio {
    fn select_leaving_row(&self, dictionary: &Dictionary, column: usize) -> Option<usize> {
        min_ratio(dictionary, column).map(|(row, _)| row)
    }
}

/// Bland's rule for the leaving variable.
///
/// Among the rows attaining the minimum ratio, the one with the smallest basic variable number is
/// used. Ratios are compared using the numerical tolerance.
pub struct SmallestNumberRatio;
impl LeavingRule for SmallestNumberRatio {
    fn select_leaving_row(&self, dictionary: &Dictionary, column: usize) -> Option<usize> {
        let (_, minimum) = min_ratio(dictionary, column)?;

        bounding_rows(dictionary, column)
            .filter(|&(_, ratio)| is_effectively_zero(ratio - minimum))
            .min_by_key(|&(row, _)| dictionary.basic_variable(row))
            .map(|(row, _)| row)
    }
}

/// The entering rules that can be configured.
///
/// Bland's rule is not one of them; it is used on top of these when a step is degenerate.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EnteringMethod {
    /// See `FirstProfitable`.
    #[default]
    First,
    /// See `GreatestCoefficient`.
    Greatest,
    /// See `MostAdvantageous`.
    MostAdvantageous,
}

impl EnteringMethod {
    /// All methods, in a fixed order.
    pub const ALL: [EnteringMethod; 3] = [
        EnteringMethod::First,
        EnteringMethod::Greatest,
        EnteringMethod::MostAdvantageous,
    ];
}

impl EnteringRule for EnteringMethod {
    fn select_entering_column(&self, dictionary: &Dictionary) -> Entering {
        match self {
            EnteringMethod::First => FirstProfitable.select_entering_column(dictionary),
            EnteringMethod::Greatest => GreatestCoefficient.select_entering_column(dictionary),
            EnteringMethod::MostAdvantageous => MostAdvantageous.select_entering_column(dictionary),
        }
    }
}

impl Display for EnteringMethod {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            EnteringMethod::First => "first",
            EnteringMethod::Greatest => "greatest",
            EnteringMethod::MostAdvantageous => "most-advantageous",
        })
    }
}

impl FromStr for EnteringMethod {
    type Err = UnknownMethod;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        EnteringMethod::ALL.into_iter()
            .find(|method| method.to_string() == text)
            .ok_or_else(|| UnknownMethod(text.to_string()))
    }
}

/// The name doesn't correspond to an `EnteringMethod`.
#[derive(Debug, Eq, PartialEq)]
pub struct UnknownMethod(pub String);

impl Display for UnknownMethod {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(
            f, "Unknown entering method \"{}\", expected one of: first, greatest, most-advantageous",
            self.0,
        )
    }
}

impl Error for UnknownMethod {}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::dictionary::Dictionary;
    use crate::algorithm::two_phase::strategy::pivot_rule::{Entering, EnteringMethod, EnteringRule, FirstProfitable, GreatestCoefficient, LeavingRule, min_ratio, MinimumRatio, MostAdvantageous, SmallestNumber, SmallestNumberRatio, UnknownMethod};
    use crate::tests::problem_1;

    /// Dictionary with a single constraint row and the given objective row.
    fn with_objective(non_basic: Vec<usize>, objective: Vec<f64>) -> Dictionary {
        let constraint = std::iter::once(1_f64)
            .chain(std::iter::repeat(-1_f64).take(non_basic.len()))
            .collect();
        let basic = vec![non_basic.iter().max().map_or(1, |max| max + 1)];

        Dictionary::new(basic, non_basic, vec![objective, constraint])
    }

    #[test]
    fn problem_1_entering() {
        let dictionary = problem_1::dictionary();
        assert_eq!(FirstProfitable.select_entering_column(&dictionary), Entering::Column(1));
        assert_eq!(GreatestCoefficient.select_entering_column(&dictionary), Entering::Column(1));
        assert_eq!(MostAdvantageous.select_entering_column(&dictionary), Entering::Column(1));
        assert_eq!(SmallestNumber.select_entering_column(&dictionary), Entering::Column(1));

        let dictionary = problem_1::dictionary_after_first_pivot();
        assert_eq!(FirstProfitable.select_entering_column(&dictionary), Entering::Column(2));
        assert_eq!(SmallestNumber.select_entering_column(&dictionary), Entering::Column(2));
    }

    #[test]
    fn first_and_greatest() {
        let dictionary = with_objective(vec![1, 2, 3], vec![0_f64, -1_f64, 2_f64, 5_f64]);
        assert_eq!(FirstProfitable.select_entering_column(&dictionary), Entering::Column(2));
        assert_eq!(GreatestCoefficient.select_entering_column(&dictionary), Entering::Column(3));
    }

    #[test]
    fn greatest_tie() {
        let dictionary = with_objective(vec![1, 2, 3], vec![0_f64, 0_f64, 3_f64, 3_f64]);
        assert_eq!(GreatestCoefficient.select_entering_column(&dictionary), Entering::Column(2));
    }

    #[test]
    fn smallest_number() {
        let dictionary = with_objective(vec![4, 2, 7, 1], vec![0_f64, 1_f64, 1_f64, 2_f64, -1_f64]);
        assert_eq!(SmallestNumber.select_entering_column(&dictionary), Entering::Column(2));
        assert_eq!(FirstProfitable.select_entering_column(&dictionary), Entering::Column(1));
    }

    #[test]
    fn optimal() {
        let dictionary = with_objective(vec![1, 2], vec![3_f64, -1_f64, 1e-15_f64]);
        assert_eq!(FirstProfitable.select_entering_column(&dictionary), Entering::Optimal);
        assert_eq!(GreatestCoefficient.select_entering_column(&dictionary), Entering::Optimal);
        assert_eq!(MostAdvantageous.select_entering_column(&dictionary), Entering::Optimal);
        assert_eq!(SmallestNumber.select_entering_column(&dictionary), Entering::Optimal);
        assert_eq!(FirstProfitable.select_entering_column(&problem_1::optimal_dictionary()), Entering::Optimal);
    }

    #[test]
    fn most_advantageous() {
        // Column 1 can increase by 1, column 2 by 10
        let dictionary = Dictionary::new(vec![3, 4], vec![1, 2], vec![
            vec![0_f64, 4_f64, 3_f64],
            vec![1_f64, -1_f64, 0_f64],
            vec![10_f64, 0_f64, -1_f64],
        ]);
        assert_eq!(MostAdvantageous.select_entering_column(&dictionary), Entering::Column(2));
        assert_eq!(GreatestCoefficient.select_entering_column(&dictionary), Entering::Column(1));
    }

    #[test]
    fn most_advantageous_unbounded() {
        let dictionary = Dictionary::new(vec![3], vec![1, 2], vec![
            vec![0_f64, 1_f64, 2_f64],
            vec![1_f64, -1_f64, 1_f64],
        ]);
        assert_eq!(MostAdvantageous.select_entering_column(&dictionary), Entering::Unbounded);
        assert_eq!(FirstProfitable.select_entering_column(&dictionary), Entering::Column(1));
    }

    #[test]
    fn leaving() {
        let dictionary = problem_1::dictionary();
        assert_eq!(min_ratio(&dictionary, 1).map(|(row, _)| row), Some(2));
        assert_abs_diff_eq!(min_ratio(&dictionary, 1).unwrap().1, 6_f64);
        assert_eq!(MinimumRatio.select_leaving_row(&dictionary, 1), Some(2));
        assert_eq!(MinimumRatio.select_leaving_row(&dictionary, 2), Some(3));
        assert_eq!(SmallestNumberRatio.select_leaving_row(&dictionary, 1), Some(2));
    }

    #[test]
    fn leaving_unbounded() {
        let dictionary = Dictionary::new(vec![3, 4], vec![1, 2], vec![
            vec![0_f64, 1_f64, 1_f64],
            vec![1_f64, 1_f64, -1_f64],
            vec![1_f64, -1e-15_f64, -1_f64],
        ]);
        assert_eq!(min_ratio(&dictionary, 1), None);
        assert_eq!(MinimumRatio.select_leaving_row(&dictionary, 1), None);
        assert_eq!(SmallestNumberRatio.select_leaving_row(&dictionary, 1), None);
    }

    #[test]
    fn leaving_tie() {
        let dictionary = Dictionary::new(vec![5, 3], vec![1], vec![
            vec![0_f64, 1_f64],
            vec![2_f64, -1_f64],
            vec![2_f64, -1_f64],
        ]);
        assert_eq!(MinimumRatio.select_leaving_row(&dictionary, 1), Some(1));
        assert_eq!(SmallestNumberRatio.select_leaving_row(&dictionary, 1), Some(2));
    }

    #[test]
    fn leaving_tie_within_tolerance() {
        let dictionary = Dictionary::new(vec![3, 5], vec![1], vec![
            vec![0_f64, 1_f64],
            vec![2_f64 + 1e-14_f64, -1_f64],
            vec![2_f64, -1_f64],
        ]);
        assert_eq!(MinimumRatio.select_leaving_row(&dictionary, 1), Some(2));
        assert_eq!(SmallestNumberRatio.select_leaving_row(&dictionary, 1), Some(1));
    }

    #[test]
    fn degenerate_ratio() {
        let dictionary = Dictionary::new(vec![3, 4], vec![1], vec![
            vec![0_f64, 1_f64],
            vec![1_f64, -1_f64],
            vec![0_f64, -2_f64],
        ]);
        assert_eq!(min_ratio(&dictionary, 1), Some((2, 0_f64)));
    }

    #[test]
    fn method_names() {
        for method in EnteringMethod::ALL {
            assert_eq!(method.to_string().parse::<EnteringMethod>(), Ok(method));
        }
        assert_eq!("most-advantageous".parse::<EnteringMethod>(), Ok(EnteringMethod::MostAdvantageous));
        assert_eq!("bland".parse::<EnteringMethod>(), Err(UnknownMethod("bland".to_string())));
        assert_eq!(EnteringMethod::default(), EnteringMethod::First);
    }

    #[test]
    fn method_dispatch() {
        let dictionary = Dictionary::new(vec![3, 4], vec![1, 2], vec![
            vec![0_f64, 4_f64, 3_f64],
            vec![1_f64, -1_f64, 0_f64],
            vec![10_f64, 0_f64, -1_f64],
        ]);
        assert_eq!(EnteringMethod::First.select_entering_column(&dictionary), Entering::Column(1));
        assert_eq!(EnteringMethod::Greatest.select_entering_column(&dictionary), Entering::Column(1));
        assert_eq!(EnteringMethod::MostAdvantageous.select_entering_column(&dictionary), Entering::Column(2));
    }
}
