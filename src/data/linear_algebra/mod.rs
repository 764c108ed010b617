//! # Linear algebra primitives
//!
//! Dense linear algebra used outside of the iterative pivoting loop.
pub mod matrix;
