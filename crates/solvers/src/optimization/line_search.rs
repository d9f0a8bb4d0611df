//! Step-length selection for descent directions.
//!
//! A descent solver picks a direction; a [`LineSearch`] picks how far to
//! move along it by minimizing `λ ↦ f(origin + λ·direction)`. The solver
//! only depends on this capability, so an exact search can be swapped for
//! a deterministic stub when testing the outer loop.

use thiserror::Error;

use descent_core::{Model, OptimizationProblem};

use super::{RaySlice, golden_section};

/// Errors that can occur while searching for a step length.
#[derive(Debug, Error)]
pub enum LineSearchError {
    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn std::error::Error + Send + Sync>),

    /// The search could not produce a step length along the ray, e.g.
    /// because the objective never rises again in that direction.
    #[error("no step length found along the search direction")]
    NoStep(#[source] golden_section::Error),
}

impl From<golden_section::Error> for LineSearchError {
    fn from(error: golden_section::Error) -> Self {
        match error {
            golden_section::Error::Model(e) => Self::Model(e),
            golden_section::Error::Problem(e) => Self::Problem(e),
            e @ (golden_section::Error::Bracket { .. }
            | golden_section::Error::NonFinite { .. }) => Self::NoStep(e),
        }
    }
}

/// Chooses a step length along a search ray.
pub trait LineSearch {
    /// Returns a step length `λ` for the ray `origin + λ·direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails along the ray or no step
    /// length can be determined.
    fn step_length<M, P, const N: usize>(
        &self,
        model: &M,
        problem: &P,
        origin: &[f64; N],
        direction: &[f64; N],
    ) -> Result<f64, LineSearchError>
    where
        M: Model,
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>;
}

/// Exact line search by golden section over the ray.
///
/// Restricts the problem to the ray with [`RaySlice`] and minimizes the
/// one-variable slice, bracketing from the step lengths 0 and 1. Because
/// λ = 0 is a bracketing seed, the accepted step never has a worse
/// objective than the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldenSection {
    config: golden_section::Config,
}

impl GoldenSection {
    /// Creates a golden section line search with the given solver config.
    #[must_use]
    pub fn new(config: golden_section::Config) -> Self {
        Self { config }
    }
}

impl LineSearch for GoldenSection {
    fn step_length<M, P, const N: usize>(
        &self,
        model: &M,
        problem: &P,
        origin: &[f64; N],
        direction: &[f64; N],
    ) -> Result<f64, LineSearchError>
    where
        M: Model,
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    {
        let slice = RaySlice::new(problem, *origin, *direction);
        let solution = golden_section::minimize(model, &slice, [0.0, 1.0], &self.config)?;
        Ok(solution.x)
    }
}

/// Always returns the same step length.
///
/// Useful as a deterministic stand-in for an exact search when testing a
/// descent loop, and for plain fixed-step gradient descent.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep(pub f64);

impl LineSearch for FixedStep {
    fn step_length<M, P, const N: usize>(
        &self,
        _model: &M,
        _problem: &P,
        _origin: &[f64; N],
        _direction: &[f64; N],
    ) -> Result<f64, LineSearchError>
    where
        M: Model,
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    {
        Ok(self.0)
    }
}
