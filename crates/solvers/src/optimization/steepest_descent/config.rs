use thiserror::Error;

/// Configuration for the steepest descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    grad_tol: f64,
}

/// Errors that can occur when validating a steepest descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grad_tol must be finite and non-negative")]
    GradTol,

    #[error("max_iters must be positive")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50, 1e-8).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated gradient tolerance.
    ///
    /// A `grad_tol` of zero is allowed — the iteration cap still bounds
    /// the loop — but negatives and non-finite values are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `grad_tol` is negative
    /// or non-finite.
    pub fn new(max_iters: usize, grad_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !grad_tol.is_finite() || grad_tol < 0.0 {
            return Err(ConfigError::GradTol);
        }

        Ok(Self {
            max_iters,
            grad_tol,
        })
    }

    /// Returns the maximum number of descent steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the stopping threshold on the gradient's Euclidean norm.
    #[must_use]
    pub fn grad_tol(&self) -> f64 {
        self.grad_tol
    }
}
