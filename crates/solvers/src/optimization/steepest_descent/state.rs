use descent_core::Snapshot;

use crate::optimization::evaluate::GradientEvaluation;

use super::{Config, Iterate, Solution, solution::Status};

/// The solver's loop state: the current iterate, its gradient, and the
/// snapshot backing it.
///
/// With an exact line search the objective never increases, so the
/// current iterate is also the best one seen.
pub(super) struct State<I, O, const N: usize> {
    current: Iterate<N>,
    gradient: [f64; N],
    snapshot: Snapshot<I, O>,
}

impl<I, O, const N: usize> State<I, O, N> {
    pub(super) fn new(eval: GradientEvaluation<I, O, N>) -> Self {
        Self {
            current: Iterate::from(&eval),
            gradient: eval.gradient,
            snapshot: eval.snapshot,
        }
    }

    pub(super) fn current(&self) -> Iterate<N> {
        self.current
    }

    pub(super) fn gradient(&self) -> &[f64; N] {
        &self.gradient
    }

    /// Replaces the state with a freshly evaluated iterate.
    pub(super) fn advance(&mut self, eval: GradientEvaluation<I, O, N>) {
        self.current = Iterate::from(&eval);
        self.gradient = eval.gradient;
        self.snapshot = eval.snapshot;
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.current.gradient_norm <= config.grad_tol()
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O, N> {
        Solution {
            status,
            x: self.current.x,
            objective: self.current.objective,
            gradient_norm: self.current.gradient_norm,
            snapshot: self.snapshot,
            iters,
        }
    }
}
