//! # Problem files
//!
//! A problem file contains whitespace separated numbers:
//!
//! ```text
//! n m
//! a_11 ... a_1n b_1
//! ...
//! a_m1 ... a_mn b_m
//! c_1 ... c_n
//! ```
//!
//! That is, the number of decision variables and of constraints, a line for each constraint `a_i x
//! <= b_i` and the coefficients of the objective function, which is maximized. Line breaks are not
//! significant, but they are used to report where something went wrong. Both a `.` and a `,` are
//! accepted as the decimal separator.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::StandardForm;
use crate::io::error::{FileLocation, ParseError};

/// A number in the file, with the line it was found on.
type Token<'a> = (FileLocation<'a>, &'a str);

/// Parse the contents of a problem file.
///
/// # Errors
///
/// When a number is malformed, when there are too few numbers, or when there are numbers after the
/// objective function.
pub fn parse(program: &str) -> Result<StandardForm, ParseError> {
    let mut tokens = tokens(program);

    let nr_variables = read_count(&mut tokens, "number of variables")?;
    let nr_constraints = read_count(&mut tokens, "number of constraints")?;

    let row_length = nr_variables.checked_add(1)
        .ok_or_else(|| ParseError::new(format!("Number of variables {} is too large", nr_variables)))?;

    let mut constraints = Vec::new();
    let mut b = Vec::new();
    for i in 1..=nr_constraints {
        let row = read_numbers(&mut tokens, row_length)
            .map_err(|error| ParseError::with_cause(format!("Invalid constraint {}", i), error))?;
        let (rhs, coefficients) = row.split_last()
            .ok_or_else(|| ParseError::new(format!("Constraint {} is empty", i)))?;
        b.push(*rhs);
        constraints.push(coefficients.to_vec());
    }

    let cost = read_numbers(&mut tokens, nr_variables)
        .map_err(|error| ParseError::with_cause("Invalid objective function", error))?;

    if let Some(((line_number, line), token)) = tokens.next() {
        return Err(ParseError::with_file_location(
            format!("Unexpected value \"{}\" after the objective function", token),
            (line_number, line),
        ));
    }

    let constraints = if constraints.is_empty() {
        DenseMatrix::zeros(0, nr_variables)
    } else {
        DenseMatrix::from_data(constraints)
    };

    Ok(StandardForm::new(constraints, b, cost, 0_f64))
}

/// Split the program in numbers, remembering their lines.
fn tokens(program: &str) -> impl Iterator<Item = Token<'_>> {
    program.lines()
        .enumerate()
        .flat_map(|(index, line)| {
            line.split_whitespace()
                .map(move |token| ((index as u64 + 1, line), token))
        })
}

fn read_count<'a>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    name: &str,
) -> Result<usize, ParseError> {
    let ((line_number, line), token) = tokens.next()
        .ok_or_else(|| ParseError::new(format!("Unexpected end of file, expected the {}", name)))?;

    token.parse().map_err(|_| ParseError::with_file_location(
        format!("Could not parse \"{}\" as the {}", token, name),
        (line_number, line),
    ))
}

fn read_numbers<'a>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    count: usize,
) -> Result<Vec<f64>, ParseError> {
    let mut numbers = Vec::new();
    for i in 0..count {
        let ((line_number, line), token) = tokens.next()
            .ok_or_else(|| ParseError::new(format!(
                "Unexpected end of file, expected {} values but found {}", count, i,
            )))?;
        let number = parse_number(token).ok_or_else(|| ParseError::with_file_location(
            format!("Could not parse \"{}\" as a number", token),
            (line_number, line),
        ))?;
        numbers.push(number);
    }

    Ok(numbers)
}

/// Read a finite number, with either a `.` or a `,` as the decimal separator.
fn parse_number(token: &str) -> Option<f64> {
    let value = match token.parse::<f64>() {
        Ok(value) => value,
        Err(_) if token.matches(',').count() == 1 && !token.contains('.') => {
            token.replace(',', ".").parse().ok()?
        },
        Err(_) => return None,
    };

    if value.is_finite() { Some(value) } else { None }
}
