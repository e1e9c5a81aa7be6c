//! Vasicek one-factor interest rate model.
//!
//! The Vasicek model is a short-rate model described by:
//! ```text
//! dr(t) = a * (b - r(t)) * dt + sigma * dW(t)
//! ```
//! where:
//! - r(t) = short rate at time t
//! - a = mean reversion speed (must be positive)
//! - b = long-run mean level
//! - sigma = volatility (must be non-negative)
//! - dW(t) = Wiener process increment
//!
//! ## Key Properties
//!
//! - **Mean reversion**: rates are pulled towards the long-run mean `b`
//! - **Analytical tractability**: closed-form zero-coupon bond prices
//!   (see [`crate::analytical`])
//! - **Negative rates**: the Gaussian dynamics allow negative rates
//!
//! ## Usage
//!
//! ```
//! use vasicek_models::models::vasicek::VasicekParams;
//! use vasicek_models::models::stochastic::ShortRateModel;
//!
//! let params = VasicekParams::new(0.1, 0.05, 0.01, 0.03).unwrap();
//!
//! // Evolve one step with a zero shock
//! let dt = 1.0 / 252.0;
//! let next = params.evolve_step(params.initial_rate(), dt, 0.0);
//! assert!(next > 0.03); // pulled upwards, r(0) < b
//! ```

use vasicek_core::types::DomainError;

use crate::models::stochastic::ShortRateModel;

/// Validated Vasicek model parameters.
///
/// Construct via [`VasicekParams::new`], which enforces the admissible
/// ranges. The fields are public for read access; mutating them directly
/// bypasses validation and is discouraged outside tests.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VasicekParams {
    /// Mean reversion speed (a > 0).
    pub mean_reversion: f64,
    /// Long-run mean level (b).
    pub long_run_mean: f64,
    /// Volatility of the short rate (sigma >= 0).
    pub volatility: f64,
    /// Initial short rate r(0).
    pub initial_rate: f64,
}

impl VasicekParams {
    /// Creates new Vasicek parameters with validation.
    ///
    /// # Arguments
    ///
    /// * `mean_reversion` - Mean reversion speed, strictly positive
    /// * `long_run_mean` - Long-run mean level, finite
    /// * `volatility` - Short-rate volatility, non-negative
    /// * `initial_rate` - Initial short rate, finite
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] naming the offending field
    /// when any value is non-finite, when `mean_reversion <= 0`, or when
    /// `volatility < 0`. Zero volatility is accepted: it degenerates the
    /// model to a deterministic mean-reverting drift, which is useful for
    /// verification against the closed form.
    ///
    /// # Example
    ///
    /// ```
    /// use vasicek_models::models::vasicek::VasicekParams;
    ///
    /// assert!(VasicekParams::new(0.1, 0.05, 0.01, 0.03).is_ok());
    /// assert!(VasicekParams::new(-0.1, 0.05, 0.01, 0.03).is_err());
    /// ```
    pub fn new(
        mean_reversion: f64,
        long_run_mean: f64,
        volatility: f64,
        initial_rate: f64,
    ) -> Result<Self, DomainError> {
        if !mean_reversion.is_finite() || mean_reversion <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "mean_reversion",
                reason: format!("must be strictly positive and finite, got {mean_reversion}"),
            });
        }
        if !long_run_mean.is_finite() {
            return Err(DomainError::InvalidParameter {
                name: "long_run_mean",
                reason: format!("must be finite, got {long_run_mean}"),
            });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "volatility",
                reason: format!("must be non-negative and finite, got {volatility}"),
            });
        }
        if !initial_rate.is_finite() {
            return Err(DomainError::InvalidParameter {
                name: "initial_rate",
                reason: format!("must be finite, got {initial_rate}"),
            });
        }

        Ok(Self {
            mean_reversion,
            long_run_mean,
            volatility,
            initial_rate,
        })
    }
}

impl ShortRateModel for VasicekParams {
    /// Euler-Maruyama discretisation:
    /// ```text
    /// r(t+dt) = r(t) + a * (b - r(t)) * dt + sigma * sqrt(dt) * dW
    /// ```
    fn evolve_step(&self, rate: f64, dt: f64, dw: f64) -> f64 {
        let drift = self.mean_reversion * (self.long_run_mean - rate) * dt;
        let diffusion = self.volatility * dt.sqrt() * dw;
        rate + drift + diffusion
    }

    fn initial_rate(&self) -> f64 {
        self.initial_rate
    }

    fn model_name(&self) -> &'static str {
        "Vasicek"
    }
}
