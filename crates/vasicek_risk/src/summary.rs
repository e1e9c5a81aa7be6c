//! Risk statistics over a simulated price distribution.
//!
//! The summary reports the distribution's mean, its population standard
//! deviation, and a value-at-risk figure defined as the low empirical
//! quantile of the prices themselves: at confidence `c`, the reported value
//! is the price below which a `1 - c` fraction of simulated outcomes fall.

use vasicek_core::math::stats::{empirical_quantile, mean, population_std};
use vasicek_core::types::DomainError;

/// First two moments of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (1/n normalisation).
    pub std_dev: f64,
}

/// Complete risk summary of a price distribution.
///
/// # Examples
///
/// ```rust
/// use vasicek_risk::summary::summarize;
///
/// let prices = [0.95, 0.96, 0.97, 0.98];
/// let summary = summarize(&prices, 0.95).unwrap();
/// assert_eq!(summary.confidence_level, 0.95);
/// assert!(summary.value_at_risk >= 0.95);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskSummary {
    /// Mean of the price distribution.
    pub mean: f64,
    /// Population standard deviation of the price distribution.
    pub std_dev: f64,
    /// Price at the `1 - confidence_level` empirical quantile.
    pub value_at_risk: f64,
    /// Confidence level the VaR was computed at.
    pub confidence_level: f64,
}

/// Computes mean and population standard deviation.
///
/// # Errors
///
/// Returns [`DomainError::EmptyDistribution`] for an empty sample.
pub fn moments(prices: &[f64]) -> Result<Moments, DomainError> {
    if prices.is_empty() {
        return Err(DomainError::EmptyDistribution);
    }
    Ok(Moments {
        mean: mean(prices),
        std_dev: population_std(prices),
    })
}

/// Value-at-risk as the low empirical quantile of the price distribution.
///
/// At confidence `c` the result is the linearly interpolated quantile at
/// level `1 - c` over the ascending prices; a `1 - c` fraction of simulated
/// prices falls below it.
///
/// # Errors
///
/// - [`DomainError::InvalidConfidenceLevel`] if `confidence` is not strictly
///   between 0 and 1
/// - [`DomainError::EmptyDistribution`] for an empty sample
pub fn value_at_risk(prices: &[f64], confidence: f64) -> Result<f64, DomainError> {
    if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
        return Err(DomainError::InvalidConfidenceLevel(confidence));
    }
    if prices.is_empty() {
        return Err(DomainError::EmptyDistribution);
    }
    Ok(empirical_quantile(prices, 1.0 - confidence))
}

/// Builds a full [`RiskSummary`] of the price distribution.
///
/// # Errors
///
/// Propagates the validation errors of [`moments`] and [`value_at_risk`].
pub fn summarize(prices: &[f64], confidence: f64) -> Result<RiskSummary, DomainError> {
    let var = value_at_risk(prices, confidence)?;
    let moments = moments(prices)?;
    Ok(RiskSummary {
        mean: moments.mean,
        std_dev: moments.std_dev,
        value_at_risk: var,
        confidence_level: confidence,
    })
}
