//! Simulation configuration.
//!
//! This module provides the builder-validated configuration for Monte Carlo
//! path generation: time horizon, step size, path count, and an optional
//! seed for reproducibility.

use vasicek_core::types::DomainError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the time grid and path count.
/// Use [`SimulationConfigBuilder`] to construct instances; the builder
/// validates every field and derives the step count from the horizon and
/// step size.
///
/// # Examples
///
/// ```rust
/// use vasicek_mc::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .horizon(1.0)
///     .dt(0.01)
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_steps(), 100);
/// assert_eq!(config.n_paths(), 10_000);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Simulation horizon in years.
    horizon: f64,
    /// Time step size in years.
    dt: f64,
    /// Number of simulation paths.
    n_paths: usize,
    /// Derived number of time steps per path.
    n_steps: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

/// Derives the step count from horizon and step size.
///
/// Truncates `horizon / dt`, but snaps to the nearest integer first when the
/// ratio sits within 1e-9 of one. Without the snap, grids like a one-year
/// horizon over 0.01-year steps can lose a step to binary rounding of the
/// quotient.
#[inline]
fn derive_n_steps(horizon: f64, dt: f64) -> usize {
    let ratio = horizon / dt;
    let rounded = ratio.round();
    if (ratio - rounded).abs() < 1e-9 {
        rounded as usize
    } else {
        ratio.floor() as usize
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the simulation horizon in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the time step size in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the derived number of time steps per path.
    ///
    /// This is `horizon / dt` truncated to an integer; any horizon remainder
    /// shorter than one step is not simulated.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API with validation at build time.
///
/// # Examples
///
/// ```rust
/// use vasicek_mc::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .horizon(2.0)
///     .dt(1.0 / 252.0)  // Daily steps
///     .n_paths(50_000)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.n_steps(), 504);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    horizon: Option<f64>,
    dt: Option<f64>,
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the simulation horizon in years.
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the time step size in years.
    #[inline]
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidParameter`] if `horizon` or `dt` is unset,
    ///   non-finite, or not strictly positive
    /// - [`DomainError::InvalidPathCount`] if `n_paths` is outside
    ///   [1, 10_000_000]
    /// - [`DomainError::DegenerateConfiguration`] if the horizon is shorter
    ///   than one step
    /// - [`DomainError::InvalidStepCount`] if the derived step count exceeds
    ///   10_000
    pub fn build(self) -> Result<SimulationConfig, DomainError> {
        let horizon = self.horizon.ok_or(DomainError::InvalidParameter {
            name: "horizon",
            reason: "must be specified".to_string(),
        })?;
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "horizon",
                reason: format!("must be strictly positive and finite, got {horizon}"),
            });
        }

        let dt = self.dt.ok_or(DomainError::InvalidParameter {
            name: "dt",
            reason: "must be specified".to_string(),
        })?;
        if !dt.is_finite() || dt <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "dt",
                reason: format!("must be strictly positive and finite, got {dt}"),
            });
        }

        let n_paths = self.n_paths.ok_or(DomainError::InvalidParameter {
            name: "n_paths",
            reason: "must be specified".to_string(),
        })?;
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(DomainError::InvalidPathCount(n_paths));
        }

        let n_steps = derive_n_steps(horizon, dt);
        if n_steps == 0 {
            return Err(DomainError::DegenerateConfiguration { horizon, dt });
        }
        if n_steps > MAX_STEPS {
            return Err(DomainError::InvalidStepCount(n_steps));
        }

        Ok(SimulationConfig {
            horizon,
            dt,
            n_paths,
            n_steps,
            seed: self.seed,
        })
    }
}
