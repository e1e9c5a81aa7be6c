//! Euler-Maruyama path generation.
//!
//! This module implements short-rate path generation for any
//! [`ShortRateModel`]. The time grid and random draws live here; the model
//! only supplies its one-step transition.
//!
//! # Draw Order
//!
//! Random draws are consumed time-step-major: the outer loop walks steps
//! `1..=n_steps` and the inner loop walks paths `0..n_paths`, so all paths at
//! step `t` receive their shocks before any path at step `t + 1`. This order
//! is part of the reproducibility contract and must not be changed.

use vasicek_core::types::DomainError;
use vasicek_models::models::stochastic::ShortRateModel;

use crate::config::SimulationConfig;
use crate::paths::RateMatrix;
use crate::rng::SimRng;

/// Generates short-rate paths under the given model and configuration.
///
/// Every path starts at the model's initial rate in column 0 and is advanced
/// by `config.n_steps()` Euler-Maruyama steps of size `config.dt()`.
///
/// # Arguments
///
/// * `model` - Short-rate dynamics supplying the one-step transition
/// * `config` - Validated simulation configuration
/// * `rng` - Seeded generator; draws are consumed time-step-major
///
/// # Errors
///
/// Returns [`DomainError::InvalidPathCount`] if the requested matrix size
/// overflows `usize` on the target platform.
///
/// # Algorithm
///
/// 1. Precompute the row stride `n_steps + 1`
/// 2. Set column 0 of every path to `model.initial_rate()`
/// 3. For each step, batch-fill one shock per path, then advance every path
///
/// # Performance
///
/// A single `n_paths`-length shock buffer is reused across steps, so the
/// loop performs no allocation after the matrix itself.
pub fn generate_paths<M: ShortRateModel>(
    model: &M,
    config: &SimulationConfig,
    rng: &mut SimRng,
) -> Result<RateMatrix, DomainError> {
    let n_paths = config.n_paths();
    let n_steps = config.n_steps();
    let dt = config.dt();

    let row = n_steps + 1;
    if n_paths.checked_mul(row).is_none() {
        return Err(DomainError::InvalidPathCount(n_paths));
    }

    let mut matrix = RateMatrix::zeroed(n_paths, n_steps);
    let data = matrix.as_mut_slice();

    let initial = model.initial_rate();
    for path_idx in 0..n_paths {
        data[path_idx * row] = initial;
    }

    let mut shocks = vec![0.0; n_paths];
    for step in 1..=n_steps {
        rng.fill_normal(&mut shocks);
        for path_idx in 0..n_paths {
            let offset = path_idx * row + step;
            data[offset] = model.evolve_step(data[offset - 1], dt, shocks[path_idx]);
        }
    }

    Ok(matrix)
}

/// Monte Carlo path simulator.
///
/// Owns a configuration and a seeded generator so repeated simulations are
/// reproducible from the configured seed. Successive [`simulate`] calls
/// continue the random stream; construct a fresh simulator (or use
/// [`PathSimulator::with_seed`]) to restart it.
///
/// [`simulate`]: PathSimulator::simulate
///
/// # Examples
///
/// ```rust
/// use vasicek_mc::config::SimulationConfig;
/// use vasicek_mc::simulate::PathSimulator;
/// use vasicek_models::models::vasicek::VasicekParams;
///
/// let params = VasicekParams::new(0.1, 0.05, 0.01, 0.03).unwrap();
/// let config = SimulationConfig::builder()
///     .horizon(1.0)
///     .dt(0.01)
///     .n_paths(100)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut simulator = PathSimulator::new(config);
/// let matrix = simulator.simulate(&params).unwrap();
/// assert_eq!(matrix.n_paths(), 100);
/// ```
pub struct PathSimulator {
    config: SimulationConfig,
    rng: SimRng,
}

impl PathSimulator {
    /// Creates a simulator seeded from the configuration.
    ///
    /// An unset seed defaults to 0.
    pub fn new(config: SimulationConfig) -> Self {
        let seed = config.seed().unwrap_or(0);
        Self {
            rng: SimRng::from_seed(seed),
            config,
        }
    }

    /// Creates a simulator with an explicit seed, overriding the config seed.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self {
            rng: SimRng::from_seed(seed),
            config,
        }
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates one batch of paths under the given model.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`generate_paths`].
    pub fn simulate<M: ShortRateModel>(&mut self, model: &M) -> Result<RateMatrix, DomainError> {
        generate_paths(model, &self.config, &mut self.rng)
    }
}
