//! Flat path storage for simulated short rates.
//!
//! # Memory Layout
//!
//! Paths are stored in a single row-major buffer:
//! `data[path_idx * (n_steps + 1) + step_idx]`, where `step_idx = 0` holds
//! the initial rate. Contiguous rows keep per-path reductions (discounting,
//! terminal extraction) cache-friendly.

use vasicek_core::types::DomainError;

/// Simulated short-rate paths in row-major layout.
///
/// An `n_paths x (n_steps + 1)` matrix where row `i` is the i-th path and
/// column 0 is the initial rate shared by every path.
///
/// # Examples
///
/// ```rust
/// use vasicek_mc::paths::RateMatrix;
///
/// // Two paths over three steps, constant 2% rate.
/// let matrix = RateMatrix::from_rates(vec![0.02; 8], 2, 3).unwrap();
/// assert_eq!(matrix.rate(1, 3), 0.02);
/// assert_eq!(matrix.path(0).len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RateMatrix {
    /// Rates in row-major order, n_paths x (n_steps + 1).
    data: Vec<f64>,
    /// Number of paths (rows).
    n_paths: usize,
    /// Number of time steps per path (columns minus the initial rate).
    n_steps: usize,
}

impl RateMatrix {
    /// Creates a zero-filled matrix for the generator to populate.
    pub(crate) fn zeroed(n_paths: usize, n_steps: usize) -> Self {
        Self {
            data: vec![0.0; n_paths * (n_steps + 1)],
            n_paths,
            n_steps,
        }
    }

    /// Builds a matrix from an existing rate buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] if `data.len()` is not
    /// `n_paths * (n_steps + 1)`.
    pub fn from_rates(data: Vec<f64>, n_paths: usize, n_steps: usize) -> Result<Self, DomainError> {
        let expected = n_paths * (n_steps + 1);
        if data.len() != expected {
            return Err(DomainError::InvalidParameter {
                name: "data",
                reason: format!(
                    "buffer length {} does not match {} paths x {} columns",
                    data.len(),
                    n_paths,
                    n_steps + 1
                ),
            });
        }
        Ok(Self {
            data,
            n_paths,
            n_steps,
        })
    }

    /// Returns the number of paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the rate at `(path_idx, step_idx)`.
    ///
    /// `step_idx = 0` is the initial rate.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn rate(&self, path_idx: usize, step_idx: usize) -> f64 {
        debug_assert!(path_idx < self.n_paths);
        debug_assert!(step_idx <= self.n_steps);
        self.data[path_idx * (self.n_steps + 1) + step_idx]
    }

    /// Returns one full path including the initial rate.
    ///
    /// # Panics
    ///
    /// Panics if `path_idx` is out of bounds.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let row = self.n_steps + 1;
        &self.data[path_idx * row..(path_idx + 1) * row]
    }

    /// Returns the terminal rate of every path.
    pub fn terminal_rates(&self) -> Vec<f64> {
        (0..self.n_paths)
            .map(|path_idx| self.rate(path_idx, self.n_steps))
            .collect()
    }

    /// Returns the whole buffer in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable view for the generator.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
