//! Descriptive statistics over simulated samples.
//!
//! These routines implement the statistics the risk layer reports: sample
//! mean, population standard deviation, and linearly interpolated empirical
//! quantiles. All functions operate on plain `f64` slices; validation of
//! emptiness and quantile levels is the caller's responsibility.

/// Arithmetic mean of the samples.
///
/// Returns `NaN` for an empty slice; callers are expected to validate
/// emptiness before aggregating.
#[inline]
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation of the samples.
///
/// Uses the `1/n` normalisation (not the `1/(n-1)` sample estimator), so a
/// single sample has zero deviation.
///
/// # Examples
///
/// ```
/// use vasicek_core::math::stats::population_std;
///
/// assert_eq!(population_std(&[5.0]), 0.0);
/// assert_eq!(population_std(&[1.0, 3.0]), 1.0);
/// ```
pub fn population_std(samples: &[f64]) -> f64 {
    let m = mean(samples);
    let variance = samples.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Empirical quantile with linear interpolation between order statistics.
///
/// Sorts an internal copy of the samples in ascending order and evaluates
/// the quantile at fractional rank `p * (n - 1)`, blending the two adjacent
/// order statistics linearly. `p = 0.0` returns the minimum, `p = 1.0` the
/// maximum.
///
/// # Arguments
///
/// * `samples` - Non-empty observations (any order)
/// * `p` - Quantile level in [0, 1]
///
/// # Panics
///
/// Panics if `samples` is empty (index out of bounds).
///
/// # Examples
///
/// ```
/// use vasicek_core::math::stats::empirical_quantile;
///
/// let samples = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(empirical_quantile(&samples, 0.0), 1.0);
/// assert_eq!(empirical_quantile(&samples, 1.0), 4.0);
/// assert_eq!(empirical_quantile(&samples, 0.5), 2.5);
/// ```
pub fn empirical_quantile(samples: &[f64], p: f64) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + frac * (sorted[hi] - sorted[lo])
    }
}
