//! Shared numerical routines.

pub mod stats;

pub use stats::{empirical_quantile, mean, population_std};
