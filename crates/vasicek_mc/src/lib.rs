//! # vasicek_mc: Monte Carlo Path Engine (Layer 3)
//!
//! ## Layer 3 Role
//!
//! vasicek_mc turns a validated model (Layer 2) into simulated short-rate
//! paths:
//! - Seeded, reproducible random number generation ([`rng::SimRng`])
//! - Builder-validated simulation configuration ([`config::SimulationConfig`])
//! - Flat row-major path storage ([`paths::RateMatrix`])
//! - Euler-Maruyama path generation ([`simulate::generate_paths`])
//!
//! ## Determinism Contract
//!
//! For a fixed seed the engine produces bit-identical paths across runs.
//! Random draws are consumed in a fixed order: the outer loop walks time
//! steps, the inner loop walks paths, so step `t` of every path is drawn
//! before step `t + 1` of any path. Changing `n_paths` therefore changes the
//! draws assigned to every path, which is intentional.
//!
//! ## Usage Example
//!
//! ```rust
//! use vasicek_mc::config::SimulationConfig;
//! use vasicek_mc::simulate::PathSimulator;
//! use vasicek_models::models::vasicek::VasicekParams;
//!
//! let params = VasicekParams::new(0.1, 0.05, 0.01, 0.03).unwrap();
//! let config = SimulationConfig::builder()
//!     .horizon(1.0)
//!     .dt(0.01)
//!     .n_paths(1_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut simulator = PathSimulator::new(config);
//! let matrix = simulator.simulate(&params).unwrap();
//! assert_eq!(matrix.n_paths(), 1_000);
//! assert_eq!(matrix.n_steps(), 100);
//! assert_eq!(matrix.rate(0, 0), 0.03);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`config::SimulationConfig`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod paths;
pub mod rng;
pub mod simulate;

// Re-exports for convenient access
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use paths::RateMatrix;
pub use rng::SimRng;
pub use simulate::{generate_paths, PathSimulator};
