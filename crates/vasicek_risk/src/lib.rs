//! # vasicek_risk: Pathwise Discounting and Risk Statistics (Layer 4)
//!
//! ## Layer 4 Role
//!
//! vasicek_risk turns simulated short-rate paths (Layer 3) into a bond price
//! distribution and its risk statistics:
//! - Pathwise discounting of rate paths to zero-coupon bond prices
//!   ([`discount::discounted_prices`])
//! - Mean, population standard deviation, and empirical-quantile
//!   value-at-risk over the price distribution ([`summary`])
//!
//! ## Usage Example
//!
//! ```rust
//! use vasicek_mc::config::SimulationConfig;
//! use vasicek_mc::simulate::PathSimulator;
//! use vasicek_models::models::vasicek::VasicekParams;
//! use vasicek_risk::discount::discounted_prices;
//! use vasicek_risk::summary::summarize;
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
//! let matrix = PathSimulator::new(config.clone()).simulate(&params).unwrap();
//! let prices = discounted_prices(&matrix, config.dt()).unwrap();
//! let summary = summarize(&prices, 0.95).unwrap();
//!
//! assert!(summary.value_at_risk <= summary.mean);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`summary::RiskSummary`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod discount;
pub mod summary;

// Re-exports for convenient access
pub use discount::discounted_prices;
pub use summary::{moments, summarize, value_at_risk, Moments, RiskSummary};
