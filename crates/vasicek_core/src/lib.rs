//! # vasicek_core: Foundation Layer for the Vasicek Pricing Engine
//!
//! ## Layer 1 Role
//!
//! vasicek_core is the bottom layer of the engine, providing:
//! - Descriptive statistics over simulated samples (`math::stats`)
//! - Structured error types shared by every layer (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vasicek_* crates, with a single
//! external dependency:
//! - thiserror: derive macros for structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use vasicek_core::math::stats::{mean, population_std, empirical_quantile};
//!
//! let samples = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&samples), 2.5);
//! assert!((population_std(&samples) - 1.118033988749895).abs() < 1e-12);
//!
//! // Median via linear interpolation between order statistics
//! let median = empirical_quantile(&samples, 0.5);
//! assert_eq!(median, 2.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
