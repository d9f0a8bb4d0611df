//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types,
//! enabling observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasGradientNorm`] — events that carry a gradient norm
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasGradientNorm};
//!
//! struct FlatEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasGradientNorm, A: CanStopEarly> Observer<E, A> for FlatEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.gradient_norm() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use descent_core::{GradientProblem, Model};

use descent_solvers::optimization::steepest_descent;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no
    /// objective is available.
    fn objective(&self) -> f64;
}

/// An event that carries a gradient norm.
pub trait HasGradientNorm {
    /// Returns the gradient's Euclidean norm for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no
    /// gradient is available.
    fn gradient_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasObjective for steepest_descent::Event ---

impl<M, P, const N: usize> HasObjective for steepest_descent::Event<'_, M, P, N>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        match self {
            steepest_descent::Event::Stepped { iterate, .. } => iterate.objective,
            steepest_descent::Event::ModelFailed { .. }
            | steepest_descent::Event::ProblemFailed { .. }
            | steepest_descent::Event::LineSearchFailed { .. } => f64::NAN,
        }
    }
}

// --- HasGradientNorm for steepest_descent::Event ---

impl<M, P, const N: usize> HasGradientNorm for steepest_descent::Event<'_, M, P, N>
where
    M: Model,
    P: GradientProblem<N, Input = M::Input, Output = M::Output>,
{
    fn gradient_norm(&self) -> f64 {
        match self {
            steepest_descent::Event::Stepped { iterate, .. } => iterate.gradient_norm,
            steepest_descent::Event::ModelFailed { .. }
            | steepest_descent::Event::ProblemFailed { .. }
            | steepest_descent::Event::LineSearchFailed { .. } => f64::NAN,
        }
    }
}

// --- CanStopEarly for steepest_descent::Action ---

impl CanStopEarly for steepest_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
