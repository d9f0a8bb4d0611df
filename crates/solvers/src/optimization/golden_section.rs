//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! The search runs in two phases. **Bracketing** walks downhill from two
//! starting abscissae, growing the interval by the golden ratio (with
//! parabolic extrapolation capped at a growth limit) until the objective
//! rises again, which traps a minimum inside a downhill triple. **Shrinking**
//! then maintains two interior points positioned by the golden ratio,
//! compares their objectives, and narrows the section toward the better
//! point until the interior gap meets the configured tolerance.
//!
//! # When to Use
//!
//! Golden section search is appropriate when:
//! - The objective is unimodal (single minimum) along the search ray
//! - Derivative information is unavailable or expensive
//! - Function evaluations are relatively cheap
//!
//! # Limitations
//!
//! - **Single variable only**: works with [`OptimizationProblem<1>`]
//! - **Derivative-free**: slower convergence than gradient-based methods
//! - **Unimodal assumption**: may find a local minimum if several exist
//! - An objective that never rises again along the ray (unbounded below)
//!   exhausts the expansion budget and surfaces [`Error::Bracket`] or
//!   [`Error::NonFinite`]
//!
//! [`OptimizationProblem<1>`]: descent_core::OptimizationProblem

mod bracket;
mod config;
mod error;
mod search;
mod section;
mod solution;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

use descent_core::{Model, OptimizationProblem};

use search::search;

/// Finds the minimum of the objective using golden section search.
///
/// `guess` provides the two abscissae bracketing starts from; the search
/// interval expands automatically from there, so the guesses need not
/// contain the minimum.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation, or if
/// no downhill bracket can be found.
pub fn minimize<M, P>(
    model: &M,
    problem: &P,
    guess: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    search(model, problem, guess, config)
}
