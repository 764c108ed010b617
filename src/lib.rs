//! # A linear program solver
//!
//! Linear programs in standard form are solved using the two phase dictionary Simplex Method, as
//! described in the book Linear Programming by Vašek Chvátal. Each step of the algorithm can be
//! followed, and the rule used to select the entering variable can be changed between steps.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
