//! Analytical (closed-form) solutions for the Vasicek model.
//!
//! This module provides the closed-form values the Monte Carlo engine is
//! verified against: zero-coupon bond prices, the conditional mean and
//! variance of the short rate, and continuously compounded yields.
//!
//! Two bond pricers are exposed:
//!
//! - [`bond_price`]: discounts both the initial rate and the long-run mean
//!   over the same exponential loading `A(T) = (1 - e^(-aT)) / a`. This is a
//!   short-horizon approximation that omits the volatility convexity
//!   correction entirely.
//! - [`bond_price_with_convexity`]: the full affine closed form
//!   `P(T) = A(T) * exp(-B(T) * r0)` with the convexity term, the reference
//!   value for convergence testing.

use vasicek_core::types::DomainError;

use crate::models::vasicek::VasicekParams;

/// Exponential loading `B(T) = (1 - e^(-aT)) / a` on the initial rate.
#[inline]
fn rate_loading(mean_reversion: f64, maturity: f64) -> f64 {
    (1.0 - (-mean_reversion * maturity).exp()) / mean_reversion
}

fn validate_maturity(maturity: f64) -> Result<(), DomainError> {
    if !maturity.is_finite() || maturity <= 0.0 {
        return Err(DomainError::InvalidParameter {
            name: "maturity",
            reason: format!("must be strictly positive and finite, got {maturity}"),
        });
    }
    Ok(())
}

/// Approximate zero-coupon bond price.
///
/// Computes `exp(-r0 * A(T) - b * A(T))` with
/// `A(T) = (1 - e^(-aT)) / a`. Both the initial rate and the long-run mean
/// are discounted over the same loading and no volatility correction is
/// applied, so this deviates from [`bond_price_with_convexity`] even at zero
/// volatility. It is retained as the engine's fast first-order quote.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] if `maturity` is not strictly
/// positive and finite.
pub fn bond_price(params: &VasicekParams, maturity: f64) -> Result<f64, DomainError> {
    validate_maturity(maturity)?;

    let loading = rate_loading(params.mean_reversion, maturity);
    Ok((-params.initial_rate * loading - params.long_run_mean * loading).exp())
}

/// Closed-form zero-coupon bond price with the convexity correction.
///
/// The affine solution `P(0, T) = A(T) * exp(-B(T) * r0)` with
/// ```text
/// B(T)    = (1 - e^(-aT)) / a
/// ln A(T) = (B(T) - T) * (a^2 b - sigma^2 / 2) / a^2
///           - sigma^2 * B(T)^2 / (4a)
/// ```
///
/// At `sigma = 0` this reduces to `exp(-integral of E[r(t)] dt)`, which makes
/// it the reference value for zero-volatility Monte Carlo convergence tests.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] if `maturity` is not strictly
/// positive and finite.
pub fn bond_price_with_convexity(
    params: &VasicekParams,
    maturity: f64,
) -> Result<f64, DomainError> {
    validate_maturity(maturity)?;

    let a = params.mean_reversion;
    let sigma = params.volatility;
    let b = rate_loading(a, maturity);

    let ln_a = (b - maturity) * (a * a * params.long_run_mean - sigma * sigma / 2.0) / (a * a)
        - sigma * sigma * b * b / (4.0 * a);

    Ok((ln_a - b * params.initial_rate).exp())
}

/// Conditional mean of the short rate at time `t` given r(0).
///
/// `E[r(t)] = b + (r0 - b) * e^(-at)`. Decays exponentially from the initial
/// rate towards the long-run mean.
#[inline]
pub fn expected_rate(params: &VasicekParams, t: f64) -> f64 {
    params.long_run_mean
        + (params.initial_rate - params.long_run_mean) * (-params.mean_reversion * t).exp()
}

/// Conditional variance of the short rate at time `t` given r(0).
///
/// `Var[r(t)] = sigma^2 * (1 - e^(-2at)) / (2a)`. Saturates at
/// `sigma^2 / (2a)` as `t` grows.
#[inline]
pub fn rate_variance(params: &VasicekParams, t: f64) -> f64 {
    let a = params.mean_reversion;
    params.volatility * params.volatility * (1.0 - (-2.0 * a * t).exp()) / (2.0 * a)
}

/// Continuously compounded yield to maturity, `y(T) = -ln P(0, T) / T`.
///
/// Uses [`bond_price_with_convexity`] as the underlying price.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] if `maturity` is not strictly
/// positive and finite.
pub fn yield_to_maturity(params: &VasicekParams, maturity: f64) -> Result<f64, DomainError> {
    let price = bond_price_with_convexity(params, maturity)?;
    Ok(-price.ln() / maturity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn standard_params() -> VasicekParams {
        VasicekParams::new(0.1, 0.05, 0.01, 0.03).unwrap()
    }

    #[test]
    fn test_bond_price_rejects_invalid_maturity() {
        let params = standard_params();
        assert!(bond_price(&params, 0.0).is_err());
        assert!(bond_price(&params, -1.0).is_err());
        assert!(bond_price(&params, f64::NAN).is_err());
        assert!(bond_price_with_convexity(&params, f64::INFINITY).is_err());
    }

    #[test]
    fn test_bond_price_in_unit_interval() {
        let params = standard_params();
        for maturity in [0.25, 1.0, 5.0, 30.0] {
            let price = bond_price(&params, maturity).unwrap();
            assert!(price > 0.0 && price < 1.0, "price out of range: {price}");
        }
    }

    #[test]
    fn test_bond_price_decreasing_in_maturity() {
        // With r0 + b > 0 the discount exponent grows with maturity.
        let params = standard_params();
        let maturities = [0.5, 1.0, 2.0, 5.0, 10.0, 30.0];
        let prices: Vec<f64> = maturities
            .iter()
            .map(|&t| bond_price(&params, t).unwrap())
            .collect();
        for pair in prices.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_bond_price_short_maturity_limit() {
        // A(T) -> T as T -> 0, so the price approaches exp(-(r0 + b) * T).
        let params = standard_params();
        let maturity = 1e-6;
        let price = bond_price(&params, maturity).unwrap();
        let limit = (-(params.initial_rate + params.long_run_mean) * maturity).exp();
        assert_relative_eq!(price, limit, epsilon = 1e-12);
    }

    #[test]
    fn test_bond_price_known_value() {
        // a = 0.1, b = 0.05, r0 = 0.03, T = 1:
        // A(1) = (1 - e^-0.1) / 0.1, exponent = -(r0 + b) * A(1).
        let params = standard_params();
        let loading = (1.0 - (-0.1f64).exp()) / 0.1;
        let expected = (-(0.03 + 0.05) * loading).exp();
        assert_relative_eq!(bond_price(&params, 1.0).unwrap(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_convexity_price_zero_volatility_matches_mean_integral() {
        // At sigma = 0 the closed form is exp(-integral of E[r(t)] dt), with
        // integral = b * T + (r0 - b) * B(T).
        let params = VasicekParams::new(0.1, 0.05, 0.0, 0.03).unwrap();
        let maturity = 1.0;
        let b_loading = (1.0 - (-0.1f64 * maturity).exp()) / 0.1;
        let integral = params.long_run_mean * maturity
            + (params.initial_rate - params.long_run_mean) * b_loading;

        let price = bond_price_with_convexity(&params, maturity).unwrap();
        assert_relative_eq!(price, (-integral).exp(), epsilon = 1e-14);
    }

    #[test]
    fn test_convexity_price_decreasing_in_maturity() {
        let params = standard_params();
        let prices: Vec<f64> = [0.5, 1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|&t| bond_price_with_convexity(&params, t).unwrap())
            .collect();
        for pair in prices.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_expected_rate_limits() {
        let params = standard_params();
        assert_relative_eq!(expected_rate(&params, 0.0), 0.03, epsilon = 1e-15);
        // Long horizon converges to the long-run mean.
        assert_relative_eq!(expected_rate(&params, 1000.0), 0.05, epsilon = 1e-10);
        // Monotone approach from below when r0 < b.
        assert!(expected_rate(&params, 1.0) < expected_rate(&params, 5.0));
    }

    #[test]
    fn test_rate_variance_limits() {
        let params = standard_params();
        assert_eq!(rate_variance(&params, 0.0), 0.0);
        // Stationary variance sigma^2 / (2a).
        let stationary = 0.01 * 0.01 / (2.0 * 0.1);
        assert_relative_eq!(rate_variance(&params, 1000.0), stationary, epsilon = 1e-10);
        assert!(rate_variance(&params, 1.0) < stationary);
    }

    #[test]
    fn test_rate_variance_zero_volatility() {
        let params = VasicekParams::new(0.1, 0.05, 0.0, 0.03).unwrap();
        assert_eq!(rate_variance(&params, 5.0), 0.0);
    }

    #[test]
    fn test_yield_to_maturity_recovers_price() {
        let params = standard_params();
        let maturity = 5.0;
        let ytm = yield_to_maturity(&params, maturity).unwrap();
        let price = bond_price_with_convexity(&params, maturity).unwrap();
        assert_relative_eq!((-ytm * maturity).exp(), price, epsilon = 1e-12);
    }

    #[test]
    fn test_yield_flat_when_deterministic_and_flat_curve() {
        // r0 = b and sigma = 0 gives a flat term structure at level b.
        let params = VasicekParams::new(0.2, 0.04, 0.0, 0.04).unwrap();
        for maturity in [0.5, 1.0, 10.0] {
            let ytm = yield_to_maturity(&params, maturity).unwrap();
            assert_relative_eq!(ytm, 0.04, epsilon = 1e-12);
        }
    }
}
