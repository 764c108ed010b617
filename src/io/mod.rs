//! # Reading and writing of linear programs
//!
//! This module provides read functionality for problem files and a textual view of the progress of
//! the algorithm.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::data::linear_program::StandardForm;
use crate::io::error::ImportError;

pub mod dictionary_format;
pub mod display;
pub mod error;

/// Import a problem from a file.
///
/// The `import` function takes a file path and returns, if successful, the linear program it
/// describes. See `dictionary_format` for the layout of the file.
///
/// # Errors
///
/// When a file cannot be found or read, or when its contents can't be parsed, an error type is
/// returned.
pub fn import(file_path: &Path) -> Result<StandardForm, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut program)
        .map_err(ImportError::IO)?;

    let problem = dictionary_format::parse(&program).map_err(ImportError::Parse)?;
    info!(
        "Read problem with {} variables and {} constraints from {:?}",
        problem.nr_variables(), problem.nr_constraints(), file_path,
    );

    Ok(problem)
}
