//! # vasicek_models: Short-Rate Dynamics and Closed-Form Pricing
//!
//! ## Layer 2 Role
//!
//! vasicek_models sits between the numerical foundation (vasicek_core) and
//! the Monte Carlo engine (vasicek_mc), providing:
//! - Validated Vasicek model parameters (`models::vasicek`)
//! - The [`ShortRateModel`](models::stochastic::ShortRateModel) trait used by
//!   the path generator
//! - Closed-form zero-coupon bond pricing for verification (`analytical`)
//!
//! ## Model
//!
//! The Vasicek short-rate model:
//! ```text
//! dr(t) = a * (b - r(t)) * dt + sigma * dW(t)
//! ```
//! where `a` is the mean reversion speed, `b` the long-run mean level,
//! `sigma` the instantaneous volatility, and `W` a Wiener process.
//!
//! ## Usage Example
//!
//! ```rust
//! use vasicek_models::models::vasicek::VasicekParams;
//! use vasicek_models::analytical::bond_price;
//!
//! let params = VasicekParams::new(0.1, 0.05, 0.01, 0.03).unwrap();
//! let price = bond_price(&params, 1.0).unwrap();
//! assert!(price > 0.0 && price < 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`VasicekParams`](models::vasicek::VasicekParams)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
