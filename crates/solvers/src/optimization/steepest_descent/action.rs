/// Actions an observer can take during steepest descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the most recent iterate.
    ///
    /// On a failure event this discards the error; the solution carries
    /// the last successfully evaluated iterate instead.
    StopEarly,
}
