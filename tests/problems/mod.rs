//! # Small problem files
//!
//! Textbook problems, each showing a different way the algorithm can end.
use std::path::{Path, PathBuf};

use simplex_dictionary::data::linear_program::StandardForm;
use simplex_dictionary::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}

fn read(name: &str) -> StandardForm {
    import(&get_test_file_path(name)).unwrap()
}
