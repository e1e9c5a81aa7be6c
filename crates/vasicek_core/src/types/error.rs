//! Error types for structured error handling.
//!
//! All fallible operations in the engine return [`DomainError`]. Every
//! variant corresponds to a validation failure detected before any numerical
//! work begins; once inputs pass validation, computation itself is total.

use thiserror::Error;

/// Categorised validation errors for the pricing engine.
///
/// # Variants
/// - `InvalidParameter`: a model parameter violates its admissible range
/// - `InvalidPathCount`: requested path count outside [1, 10_000_000]
/// - `InvalidStepCount`: derived step count outside [1, 10_000]
/// - `DegenerateConfiguration`: horizon and step size yield zero steps
/// - `InvalidConfidenceLevel`: confidence level outside the open interval (0, 1)
/// - `EmptyDistribution`: a statistic was requested over zero samples
///
/// # Examples
/// ```
/// use vasicek_core::types::DomainError;
///
/// let err = DomainError::InvalidParameter {
///     name: "mean_reversion",
///     reason: "must be strictly positive".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "invalid parameter 'mean_reversion': must be strictly positive"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A model or configuration parameter violates its admissible range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// Path count outside the valid range [1, 10_000_000].
    #[error("invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside the valid range [1, 10_000].
    #[error("invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// Horizon shorter than one time step.
    #[error("degenerate configuration: horizon {horizon} with step size {dt} yields zero steps")]
    DegenerateConfiguration {
        /// Simulation horizon in years.
        horizon: f64,
        /// Time step size in years.
        dt: f64,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("invalid confidence level {0}: must lie strictly between 0 and 1")]
    InvalidConfidenceLevel(f64),

    /// A statistic was requested over an empty sample.
    #[error("empty distribution: at least one sample is required")]
    EmptyDistribution,
}
