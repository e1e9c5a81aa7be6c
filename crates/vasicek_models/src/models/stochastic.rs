//! ShortRateModel trait for single-factor short-rate dynamics.
//!
//! This module defines the seam between model dynamics and the Monte Carlo
//! path generator: a model provides its starting rate and a one-step
//! Euler-Maruyama transition, and the generator owns the time grid, the
//! random draws, and the path storage.
//!
//! ## Design Philosophy
//!
//! - **Static dispatch only**: the path generator is generic over the model
//!   type; no `Box<dyn Trait>` in the simulation loop
//! - **Single factor**: one Wiener increment per step; multi-factor models
//!   are out of scope for this engine

/// Unified interface for single-factor short-rate models.
///
/// # Contract
///
/// - `evolve_step` advances the rate by one time step given a standard
///   normal draw `dw` (the generator scales time, the model scales
///   diffusion)
/// - `initial_rate` is the rate every simulated path starts from
/// - the transition must be deterministic in `(rate, dt, dw)`
///
/// # Example
///
/// ```
/// use vasicek_models::models::stochastic::ShortRateModel;
/// use vasicek_models::models::vasicek::VasicekParams;
///
/// let params = VasicekParams::new(0.1, 0.05, 0.01, 0.03).unwrap();
/// let r0 = params.initial_rate();
/// let r1 = params.evolve_step(r0, 1.0 / 252.0, 0.0);
/// assert!(r1 > r0); // zero shock, rate pulled towards the long-run mean
/// ```
pub trait ShortRateModel {
    /// Advances the short rate by one time step.
    ///
    /// # Arguments
    ///
    /// * `rate` - Current short rate
    /// * `dt` - Time step size in years (must be positive)
    /// * `dw` - Standard normal draw for this step
    fn evolve_step(&self, rate: f64, dt: f64, dw: f64) -> f64;

    /// Returns the initial short rate r(0).
    fn initial_rate(&self) -> f64;

    /// Model name for logging and debugging.
    fn model_name(&self) -> &'static str;
}
