//! Pathwise discounting of simulated rate paths.
//!
//! Each short-rate path is reduced to a zero-coupon bond price by
//! approximating the integrated rate with a right Riemann sum and
//! exponentiating its negation.

use vasicek_core::types::DomainError;
use vasicek_mc::paths::RateMatrix;

/// Discounts every rate path to a zero-coupon bond price.
///
/// For path `i` with rates `r[0..=n_steps]`, the integrated rate is
/// approximated by the right Riemann sum over post-initial rates,
/// ```text
/// I_i = sum(t = 1..=n_steps) r[t] * dt
/// ```
/// and the price is `exp(-I_i)`. The initial rate `r[0]` carries no weight;
/// it only seeds the recurrence that produced the path.
///
/// # Arguments
///
/// * `matrix` - Simulated paths, one row per path
/// * `dt` - Time step size the paths were generated with
///
/// # Returns
///
/// One discounted price per path, in path order.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] if `dt` is not strictly
/// positive and finite. This function takes `dt` directly rather than a
/// validated configuration, so the check happens here; a NaN or
/// non-positive step size would otherwise flow silently into the summary
/// statistics.
///
/// # Examples
///
/// ```rust
/// use vasicek_mc::paths::RateMatrix;
/// use vasicek_risk::discount::discounted_prices;
///
/// // One path held flat at 5% over 4 quarterly steps.
/// let matrix = RateMatrix::from_rates(vec![0.05; 5], 1, 4).unwrap();
/// let prices = discounted_prices(&matrix, 0.25).unwrap();
/// assert!((prices[0] - (-0.05f64).exp()).abs() < 1e-12);
/// ```
pub fn discounted_prices(matrix: &RateMatrix, dt: f64) -> Result<Vec<f64>, DomainError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(DomainError::InvalidParameter {
            name: "dt",
            reason: format!("must be strictly positive and finite, got {dt}"),
        });
    }

    Ok((0..matrix.n_paths())
        .map(|path_idx| {
            let path = matrix.path(path_idx);
            let integral: f64 = path[1..].iter().sum::<f64>() * dt;
            (-integral).exp()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_rate_path() {
        // Flat 3% over 10 steps of 0.1 years: integral = 0.03.
        let matrix = RateMatrix::from_rates(vec![0.03; 11], 1, 10).unwrap();
        let prices = discounted_prices(&matrix, 0.1).unwrap();
        assert_eq!(prices.len(), 1);
        assert_relative_eq!(prices[0], (-0.03f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn test_initial_rate_carries_no_weight() {
        // Two paths differing only in r[0] discount identically.
        let a = RateMatrix::from_rates(vec![0.99, 0.02, 0.03], 1, 2).unwrap();
        let b = RateMatrix::from_rates(vec![-0.50, 0.02, 0.03], 1, 2).unwrap();
        assert_eq!(
            discounted_prices(&a, 0.5).unwrap()[0],
            discounted_prices(&b, 0.5).unwrap()[0]
        );
    }

    #[test]
    fn test_single_step_path() {
        let matrix = RateMatrix::from_rates(vec![0.03, 0.04], 1, 1).unwrap();
        let prices = discounted_prices(&matrix, 0.25).unwrap();
        assert_relative_eq!(prices[0], (-0.01f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn test_price_per_path_order() {
        // Path 0 at 1%, path 1 at 10%; higher rates discount harder.
        let data = vec![0.01, 0.01, 0.01, 0.10, 0.10, 0.10];
        let matrix = RateMatrix::from_rates(data, 2, 2).unwrap();
        let prices = discounted_prices(&matrix, 0.5).unwrap();

        assert_eq!(prices.len(), 2);
        assert!(prices[0] > prices[1]);
        assert_relative_eq!(prices[0], (-0.01f64).exp(), epsilon = 1e-14);
        assert_relative_eq!(prices[1], (-0.10f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn test_negative_rates_discount_above_par() {
        let matrix = RateMatrix::from_rates(vec![-0.01; 3], 1, 2).unwrap();
        let prices = discounted_prices(&matrix, 0.5).unwrap();
        assert!(prices[0] > 1.0);
    }

    #[test]
    fn test_rejects_non_positive_or_non_finite_dt() {
        let matrix = RateMatrix::from_rates(vec![0.03; 3], 1, 2).unwrap();
        for dt in [0.0, -0.25, f64::NAN, f64::INFINITY] {
            let result = discounted_prices(&matrix, dt);
            assert!(
                matches!(result, Err(DomainError::InvalidParameter { name: "dt", .. })),
                "dt = {dt} should be rejected"
            );
        }
    }

    #[test]
    fn test_nan_dt_cannot_reach_summary_statistics() {
        // A NaN step size must fail here instead of producing NaN prices
        // that summarize() would fold into mean and value-at-risk.
        let matrix = RateMatrix::from_rates(vec![0.05; 5], 1, 4).unwrap();
        assert!(discounted_prices(&matrix, f64::NAN).is_err());
    }
}
