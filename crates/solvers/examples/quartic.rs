//! Steepest descent demo: minimize f(x) = Σ xᵢ⁴ from x₀ = [1, -1].
//!
//! The gradient is [4xᵢ³], the step length comes from an exact golden
//! section line search, and the run uses the default tolerance (1e-8 on
//! the gradient norm) and step cap (50). Prints the minimum point found.
//!
//! Run with: `cargo run --example quartic`

use std::convert::Infallible;

use descent_core::{GradientProblem, Model, OptimizationProblem};
use descent_solvers::optimization::{
    line_search::GoldenSection,
    steepest_descent::{self, Config},
};

/// f(x) = Σ xᵢ⁴.
struct Quartic;

impl Model for Quartic {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(x.iter().map(|c| c.powi(4)).sum())
    }
}

/// Objective is the model output; gradient is ∇f(x) = [4xᵢ³].
struct QuarticProblem;

impl OptimizationProblem<2> for QuarticProblem {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

impl GradientProblem<2> for QuarticProblem {
    fn gradient(&self, input: &[f64; 2], _output: &f64) -> Result<[f64; 2], Self::Error> {
        Ok([4.0 * input[0].powi(3), 4.0 * input[1].powi(3)])
    }
}

fn main() -> Result<(), steepest_descent::Error> {
    let solution = steepest_descent::minimize_unobserved(
        &Quartic,
        &QuarticProblem,
        [1.0, -1.0],
        &GoldenSection::default(),
        &Config::default(),
    )?;

    println!("El punto mínimo encontrado es: {:?}", solution.x);
    Ok(())
}
