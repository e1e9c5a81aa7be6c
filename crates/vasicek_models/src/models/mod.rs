//! Stochastic short-rate models.
//!
//! # Re-exports
//!
//! Commonly used items are re-exported at this module level:
//! - [`ShortRateModel`] from `stochastic`
//! - [`VasicekParams`] from `vasicek`

pub mod stochastic;
pub mod vasicek;

pub use stochastic::ShortRateModel;
pub use vasicek::VasicekParams;
