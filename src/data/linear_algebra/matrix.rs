//! # Dense matrices
//!
//! A small dense matrix type. It is only used to compute a dictionary directly from an explicit
//! basis, which requires the inverse of the basis matrix and a few matrix-vector products.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::data::number_types::tolerance::is_effectively_zero;

/// Uses a `Vec<Vec<f64>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

/// The matrix that should be inverted has no inverse (up to the numerical tolerance).
#[derive(Debug, Eq, PartialEq)]
pub struct SingularMatrix {
    /// Column in which no usable pivot could be found.
    pub column: usize,
}

impl Display for SingularMatrix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "matrix is singular: no pivot available in column {}", self.column)
    }
}

impl Error for SingularMatrix {}

impl DenseMatrix {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// All rows should have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Self {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_rows, nr_columns }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let data = (0..len)
            .map(|i| (0..len).map(|j| if i == j { 1_f64 } else { 0_f64 }).collect())
            .collect();

        Self::from_data(data)
    }

    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self { data: vec![vec![0_f64; columns]; rows], nr_rows: rows, nr_columns: columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<f64> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value *= factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let value = self.data[read_row][j];
            self.data[write_row][j] += factor * value;
        }
    }

    /// Build the matrix consisting of the given columns of this matrix, in the given order.
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .map(|row| columns.iter().map(|&j| row[j]).collect())
            .collect();
        Self { data, nr_rows: self.nr_rows, nr_columns: columns.len() }
    }

    /// Compute the inverse of this square matrix.
    ///
    /// Gauss-Jordan elimination on the matrix augmented with the identity, choosing in each column
    /// the row with the largest absolute value as the pivot.
    ///
    /// # Errors
    ///
    /// If no pivot can be found in some column, the matrix is considered singular.
    pub fn inverse(&self) -> Result<Self, SingularMatrix> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);
        let size = self.nr_rows;

        let mut work = self.clone();
        let mut inverse = Self::identity(size);

        for column in 0..size {
            let pivot_row = (column..size)
                .max_by(|&i, &k| work.data[i][column].abs().total_cmp(&work.data[k][column].abs()))
                .filter(|&i| !is_effectively_zero(work.data[i][column]))
                .ok_or(SingularMatrix { column })?;

            work.data.swap(column, pivot_row);
            inverse.data.swap(column, pivot_row);

            let factor = 1_f64 / work.data[column][column];
            work.multiply_row(column, factor);
            inverse.multiply_row(column, factor);

            for row in (0..size).filter(|&row| row != column) {
                let factor = -work.data[row][column];
                if factor != 0_f64 {
                    work.mul_add_rows(column, row, factor);
                    inverse.mul_add_rows(column, row, factor);
                }
            }
        }

        Ok(inverse)
    }

    /// Compute `M v` for a vector `v` of length `nr_columns`.
    pub fn right_product(&self, vector: &[f64]) -> Vec<f64> {
        debug_assert_eq!(vector.len(), self.nr_columns);

        self.data.iter().map(|row| dot(row, vector)).collect()
    }

    /// Compute `v M` for a vector `v` of length `nr_rows`.
    pub fn left_product(&self, vector: &[f64]) -> Vec<f64> {
        debug_assert_eq!(vector.len(), self.nr_rows);

        (0..self.nr_columns)
            .map(|j| vector.iter().zip_eq(&self.data).map(|(v, row)| v * row[j]).sum())
            .collect()
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

/// Inner product of two vectors of equal length.
pub fn dot(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip_eq(right).map(|(a, b)| a * b).sum()
}

impl Display for DenseMatrix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().map(|value| format!("{:>8.3}", value)).join(" "))?;
        }
        Ok(())
    }
}
