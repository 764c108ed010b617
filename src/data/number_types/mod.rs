//! # Number types
//!
//! The dictionary is computed with IEEE double precision floats. This module collects the
//! conventions used to compare those values.
pub mod tolerance;
