use thiserror::Error;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
    grow_limit: f64,
    max_expansions: usize,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("grow_limit must be finite and positive")]
    Grow,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-12, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// Bracketing defaults to a growth limit of 110 interval widths per
    /// step and a budget of 1000 expansions; see
    /// [`with_expansion`](Self::with_expansion) to override.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
            grow_limit: 110.0,
            max_expansions: 1000,
        })
    }

    /// Overrides how far and how often bracketing may expand.
    ///
    /// `grow_limit` caps a single parabolic extrapolation at that many
    /// current interval widths; `max_expansions` bounds the total number
    /// of expansion steps before bracketing gives up.
    ///
    /// # Errors
    ///
    /// Returns an error if `grow_limit` is non-finite or not positive.
    pub fn with_expansion(
        mut self,
        grow_limit: f64,
        max_expansions: usize,
    ) -> Result<Self, ConfigError> {
        if !grow_limit.is_finite() || grow_limit <= 0.0 {
            return Err(ConfigError::Grow);
        }

        self.grow_limit = grow_limit;
        self.max_expansions = max_expansions;
        Ok(self)
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the bracketing growth limit, in interval widths.
    #[must_use]
    pub fn grow_limit(&self) -> f64 {
        self.grow_limit
    }

    /// Returns the bracketing expansion budget.
    #[must_use]
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }
}
