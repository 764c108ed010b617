//! # Strategies
//!
//! Rules used to pick the variables of a basis change.
pub mod pivot_rule;
