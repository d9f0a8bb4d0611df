//! Core traits and types for the descent framework.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OptimizationProblem`], [`GradientProblem`] — problem traits that adapt
//!   solver variables to model inputs and extract metrics from outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{GradientProblem, OptimizationProblem};
pub use {model::Model, model::Snapshot};
