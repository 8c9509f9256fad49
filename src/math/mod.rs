//! Mathematical utilities for the solver

/// Shannon entropy over weighted candidate distributions
pub mod entropy;
