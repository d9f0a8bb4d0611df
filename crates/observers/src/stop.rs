use descent_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver once the objective is good enough.
///
/// After at least `min_events` events, the first event whose objective
/// falls below `threshold` stops the solver early. Failure events report
/// `NaN` objectives and never trigger a stop.
///
/// Works with any solver whose events carry an objective and whose
/// actions can signal early termination.
#[derive(Debug, Clone, Copy)]
pub struct GoodEnough {
    threshold: f64,
    min_events: usize,
    seen: usize,
}

impl GoodEnough {
    /// Creates an observer that stops below `threshold` after at least
    /// `min_events` events.
    #[must_use]
    pub fn new(threshold: f64, min_events: usize) -> Self {
        Self {
            threshold,
            min_events,
            seen: 0,
        }
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        if self.seen >= self.min_events && event.objective() < self.threshold {
            return Some(A::stop_early());
        }
        None
    }
}
