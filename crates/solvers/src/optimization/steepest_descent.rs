//! Steepest descent with an injected exact line search.
//!
//! # Algorithm
//!
//! Starting from `x0`, each step moves along the negative gradient. The
//! step length is chosen by the injected [`LineSearch`] — exact golden
//! section search by default, so every accepted step minimizes the
//! objective along its ray and the objective sequence never increases.
//! The solver stops as soon as the Euclidean norm of the gradient falls
//! to the configured tolerance, or after the configured number of steps.
//!
//! Hitting the step cap is not an error: the current iterate is returned
//! with [`Status::MaxIters`], since a partially converged point is still
//! the best answer available.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed step:
//!
//! - [`Event::Stepped`] — a step was accepted
//! - [`Event::ModelFailed`] — the model returned an error at a trial point
//! - [`Event::ProblemFailed`] — the problem returned an error (input,
//!   objective, or gradient)
//! - [`Event::LineSearchFailed`] — no step length could be found along
//!   the current direction
//!
//! Each event includes `previous`, the iterate the step started from. No
//! event is emitted for the evaluation of `x0` itself; a failure there has
//! no useful partial solution and is returned as an error directly.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately and keep
//! the most recent iterate. On failure events, any other response lets the
//! error propagate.
//!
//! [`LineSearch`]: crate::optimization::line_search::LineSearch

mod action;
mod config;
mod error;
mod event;
mod iterate;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use iterate::Iterate;
pub use solution::{Solution, Status};

use descent_core::{GradientProblem, Model, Observer};

use crate::optimization::line_search::LineSearch;

use search::search;

/// Minimizes the objective by steepest descent from `x0`.
///
/// The observer receives an [`Event`] for every completed step. See the
/// [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the model, the problem, or the line search fails
/// and the observer does not stop the solver early.
pub fn minimize<M, P, L, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    line_search: &L,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
    L: LineSearch,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, x0, line_search, config, observer)
}

/// Minimizes the objective by steepest descent without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error if the model, the problem, or the line search fails.
pub fn minimize_unobserved<M, P, L, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    line_search: &L,
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
    L: LineSearch,
{
    minimize(model, problem, x0, line_search, config, ())
}
