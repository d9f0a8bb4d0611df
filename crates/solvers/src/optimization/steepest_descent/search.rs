use descent_core::{GradientProblem, Model, Observer};

use crate::optimization::evaluate::evaluate_gradient;
use crate::optimization::line_search::LineSearch;
use crate::optimization::vector::{add_scaled, scaled};

use super::{
    Action, Config, Error, Event, Iterate, Solution, solution::Status, state::State,
};

/// Core steepest descent loop.
///
/// Each pass checks convergence first, so an `x0` whose gradient already
/// meets the tolerance is returned unchanged with zero completed steps.
pub(super) fn search<M, P, L, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    line_search: &L,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
    L: LineSearch,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let first = evaluate_gradient(model, problem, x0).map_err(Error::from)?;
    let mut state = State::new(first);

    for iter in 1..=config.max_iters() {
        if state.is_converged(config) {
            return Ok(state.into_solution(Status::Converged, iter - 1));
        }

        let origin = state.current().x;
        let direction = scaled(state.gradient(), -1.0);

        let step_length = match line_search.step_length(model, problem, &origin, &direction) {
            Ok(lambda) => lambda,
            Err(error) => {
                let event = Event::LineSearchFailed {
                    previous: state.current(),
                    error: &error,
                };
                return match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        Ok(state.into_solution(Status::StoppedByObserver, iter - 1))
                    }
                    None => Err(error.into()),
                };
            }
        };

        let x_next = add_scaled(&origin, step_length, &direction);
        match step_and_observe(model, problem, x_next, step_length, &mut state, &mut observer)? {
            StepOutcome::Continue => {}
            StepOutcome::StopWithStep => {
                return Ok(state.into_solution(Status::StoppedByObserver, iter));
            }
            StepOutcome::StopAtFailure => {
                return Ok(state.into_solution(Status::StoppedByObserver, iter - 1));
            }
        }
    }

    // The cap was reached; the final step may still have converged.
    let status = if state.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(state.into_solution(status, config.max_iters()))
}

enum StepOutcome {
    Continue,
    StopWithStep,
    StopAtFailure,
}

/// Evaluate the trial point, emit the event, advance on success, and map
/// the observer's action.
fn step_and_observe<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
    step_length: f64,
    state: &mut State<M::Input, M::Output, N>,
    observer: &mut Obs,
) -> Result<StepOutcome, Error>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    match evaluate_gradient(model, problem, x) {
        Ok(eval) => {
            let event = Event::Stepped {
                iterate: Iterate::from(&eval),
                previous: state.current(),
                step_length,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
            };
            let action = observer.observe(&event);
            state.advance(eval);
            match action {
                Some(Action::StopEarly) => Ok(StepOutcome::StopWithStep),
                None => Ok(StepOutcome::Continue),
            }
        }
        Err(error) => {
            let action = Event::emit_failure(x, state.current(), &error, observer);
            match action {
                Some(Action::StopEarly) => Ok(StepOutcome::StopAtFailure),
                None => Err(error.into()),
            }
        }
    }
}
