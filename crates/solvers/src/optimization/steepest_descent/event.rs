use descent_core::{GradientProblem, Model, Observer};

use crate::optimization::evaluate::EvalError;
use crate::optimization::line_search::LineSearchError;

use super::{Action, Iterate};

/// Events emitted by the steepest descent solver.
///
/// Each event carries `previous`, the iterate the step started from, so
/// observers can compare consecutive iterates without keeping their own
/// history.
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
{
    /// A descent step was accepted.
    Stepped {
        /// The new iterate after the step.
        iterate: Iterate<N>,

        /// The iterate the step started from.
        previous: Iterate<N>,

        /// The accepted step length along the negative gradient.
        step_length: f64,

        /// The model input at the new iterate.
        input: &'a M::Input,

        /// The model output at the new iterate.
        output: &'a M::Output,
    },

    /// Model evaluation failed at a trial point.
    ModelFailed {
        /// The trial point where evaluation failed.
        x: [f64; N],

        /// The iterate the step started from.
        previous: Iterate<N>,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction, objective, or gradient).
    ProblemFailed {
        /// The trial point where evaluation failed.
        x: [f64; N],

        /// The iterate the step started from.
        previous: Iterate<N>,

        /// The problem error.
        error: &'a P::Error,
    },

    /// The line search found no step length along the current direction.
    LineSearchFailed {
        /// The iterate the step started from.
        previous: Iterate<N>,

        /// The line search error.
        error: &'a LineSearchError,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the iterate the step started from.
    #[must_use]
    pub fn previous(&self) -> Iterate<N> {
        match self {
            Self::Stepped { previous, .. }
            | Self::ModelFailed { previous, .. }
            | Self::ProblemFailed { previous, .. }
            | Self::LineSearchFailed { previous, .. } => *previous,
        }
    }

    /// Emits an evaluation-failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        x: [f64; N],
        previous: Iterate<N>,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    x,
                    previous,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    x,
                    previous,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
