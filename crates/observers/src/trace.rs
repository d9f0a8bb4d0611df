use descent_core::{GradientProblem, Model, Observer};

use descent_solvers::optimization::steepest_descent::{Action, Event};

/// One accepted descent step, as seen by [`IterateTrace`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord<const N: usize> {
    /// The iterate after the step.
    pub x: [f64; N],

    /// The objective value at `x`.
    pub objective: f64,

    /// The gradient norm at `x`.
    pub gradient_norm: f64,

    /// The accepted step length.
    pub step_length: f64,
}

/// Records every accepted steepest descent step.
///
/// The trace never influences the solver; observing always returns no
/// action. Pass it by mutable reference so the records remain readable
/// after the run:
///
/// ```rust,ignore
/// let mut trace = IterateTrace::new();
/// let solution = steepest_descent::minimize(
///     &model, &problem, x0, &line_search, &config, &mut trace,
/// )?;
/// for record in trace.records() { /* ... */ }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IterateTrace<const N: usize> {
    records: Vec<TraceRecord<N>>,
}

impl<const N: usize> IterateTrace<N> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the recorded steps, in order.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord<N>] {
        &self.records
    }

    /// Returns true if the recorded objective sequence never increases.
    #[must_use]
    pub fn is_monotone(&self) -> bool {
        self.records
            .windows(2)
            .all(|pair| pair[1].objective <= pair[0].objective)
    }
}

impl<'a, M, P, const N: usize> Observer<Event<'a, M, P, N>, Action> for &mut IterateTrace<N>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'a, M, P, N>) -> Option<Action> {
        if let Event::Stepped {
            iterate,
            step_length,
            ..
        } = event
        {
            self.records.push(TraceRecord {
                x: iterate.x,
                objective: iterate.objective,
                gradient_norm: iterate.gradient_norm,
                step_length: *step_length,
            });
        }
        None
    }
}
