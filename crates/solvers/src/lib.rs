//! Numerical minimization solvers for the descent framework.
//!
//! Solvers are generic over a [`Model`] and a problem trait from
//! `descent-core`, so the same algorithm can drive anything from a
//! closed-form objective to a full simulation.
//!
//! [`Model`]: descent_core::Model

pub mod optimization;
