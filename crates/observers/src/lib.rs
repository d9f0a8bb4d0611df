//! Reusable observers for the descent framework.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across different solvers in the descent ecosystem.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasGradientNorm`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`IterateTrace`] — records every accepted descent step
//! - [`GoodEnough`] — stops a solver once the objective is low enough
//!
//! [`Observer`]: descent_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasGradientNorm`]: traits::HasGradientNorm
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop;
mod trace;

pub use stop::GoodEnough;
pub use trace::{IterateTrace, TraceRecord};
