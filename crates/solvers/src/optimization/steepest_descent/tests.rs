use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use descent_core::{GradientProblem, Model, OptimizationProblem};

use crate::optimization::line_search::{FixedStep, GoldenSection};

use super::{Action, Config, Error, Event, Status, minimize, minimize_unobserved};

/// f(x) = Σ xᵢ⁴.
struct Quartic<const N: usize>;

impl<const N: usize> Model for Quartic<N> {
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        Ok(x.iter().map(|c| c.powi(4)).sum())
    }
}

/// Objective is the model output; gradient is [4xᵢ³].
struct QuarticProblem<const N: usize>;

impl<const N: usize> OptimizationProblem<N> for QuarticProblem<N> {
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; N], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

impl<const N: usize> GradientProblem<N> for QuarticProblem<N> {
    fn gradient(&self, input: &[f64; N], _output: &f64) -> Result<[f64; N], Self::Error> {
        let mut g = *input;
        for c in &mut g {
            *c = 4.0 * c.powi(3);
        }
        Ok(g)
    }
}

fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

#[test]
fn quartic_converges_from_textbook_start() {
    let solution = minimize_unobserved(
        &Quartic::<2>,
        &QuarticProblem::<2>,
        [1.0, -1.0],
        &GoldenSection::default(),
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.gradient_norm <= 1e-8);
    assert!(norm(&solution.x) < norm(&[1.0, -1.0]));
}

#[test]
fn objective_never_increases_along_the_run() {
    let mut monotone = true;
    let observer = |event: &Event<'_, _, _, 2>| {
        if let Event::Stepped {
            iterate, previous, ..
        } = event
        {
            if iterate.objective > previous.objective {
                monotone = false;
            }
        }
        None
    };

    minimize(
        &Quartic::<2>,
        &QuarticProblem::<2>,
        [1.0, 0.5],
        &GoldenSection::default(),
        &Config::default(),
        observer,
    )
    .expect("should finish");

    assert!(monotone, "objective increased across a step");
}

#[test]
fn zero_gradient_returns_the_start_unchanged() {
    let solution = minimize_unobserved(
        &Quartic::<2>,
        &QuarticProblem::<2>,
        [0.0, 0.0],
        &GoldenSection::default(),
        &Config::default(),
    )
    .expect("should short-circuit");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, [0.0, 0.0]);
}

#[test]
fn resolving_from_the_solution_does_not_regress() {
    let line_search = GoldenSection::default();
    let config = Config::default();

    let first = minimize_unobserved(
        &Quartic::<2>,
        &QuarticProblem::<2>,
        [0.8, 0.3],
        &line_search,
        &config,
    )
    .expect("first run should finish");

    let second = minimize_unobserved(
        &Quartic::<2>,
        &QuarticProblem::<2>,
        first.x,
        &line_search,
        &config,
    )
    .expect("second run should finish");

    assert!(second.objective <= first.objective);
}

#[test]
fn works_across_dimensions() {
    let line_search = GoldenSection::default();
    let config = Config::default();

    let one = minimize_unobserved(&Quartic::<1>, &QuarticProblem::<1>, [0.5], &line_search, &config)
        .expect("should finish");
    let three = minimize_unobserved(
        &Quartic::<3>,
        &QuarticProblem::<3>,
        [0.5, -0.25, 1.0],
        &line_search,
        &config,
    )
    .expect("should finish");

    assert!(one.objective < 0.5_f64.powi(4));
    assert!(three.objective < 0.5_f64.powi(4) + 0.25_f64.powi(4) + 1.0);
}

#[test]
fn observer_can_stop_after_the_first_step() {
    let observer =
        |event: &Event<'_, _, _, 2>| matches!(event, Event::Stepped { .. }).then_some(Action::StopEarly);

    let solution = minimize(
        &Quartic::<2>,
        &QuarticProblem::<2>,
        [1.0, 0.5],
        &GoldenSection::default(),
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
}

/// f(x) = x with a constant unit gradient; no tolerance is ever met.
struct Ramp;

impl Model for Ramp {
    type Input = [f64; 1];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }
}

struct RampProblem;

impl OptimizationProblem<1> for RampProblem {
    type Input = [f64; 1];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 1], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

impl GradientProblem<1> for RampProblem {
    fn gradient(&self, _input: &[f64; 1], _output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([1.0])
    }
}

#[test]
fn iteration_cap_bounds_a_non_converging_run() {
    let config = Config::new(7, 1e-8).unwrap();

    let solution = minimize_unobserved(&Ramp, &RampProblem, [0.0], &FixedStep(0.5), &config)
        .expect("should stop at the cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 7);
    assert_relative_eq!(solution.x[0], -3.5);
}

#[test]
fn zero_tolerance_is_still_bounded_by_the_cap() {
    let config = Config::new(5, 0.0).unwrap();

    let solution = minimize_unobserved(&Ramp, &RampProblem, [0.0], &FixedStep(1.0), &config)
        .expect("should stop at the cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
}

#[test]
fn unbounded_direction_fails_the_line_search() {
    let result = minimize_unobserved(
        &Ramp,
        &RampProblem,
        [0.0],
        &GoldenSection::default(),
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::LineSearch(_))));
}

#[test]
fn line_search_failure_can_be_stopped_by_observer() {
    let observer = |event: &Event<'_, _, _, 1>| {
        matches!(event, Event::LineSearchFailed { .. }).then_some(Action::StopEarly)
    };

    let solution = minimize(
        &Ramp,
        &RampProblem,
        [2.0],
        &GoldenSection::default(),
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x[0], 2.0);
}

/// Descends toward increasing x and falls off a cliff at x = 2.5.
struct Cliff;

#[derive(Debug, Clone, Error)]
#[error("model failed at x={x}")]
struct CliffError {
    x: f64,
}

impl Model for Cliff {
    type Input = [f64; 1];
    type Output = f64;
    type Error = CliffError;

    fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        if x[0] > 2.5 {
            Err(CliffError { x: x[0] })
        } else {
            Ok(-x[0])
        }
    }
}

struct CliffProblem;

impl OptimizationProblem<1> for CliffProblem {
    type Input = [f64; 1];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 1], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

impl GradientProblem<1> for CliffProblem {
    fn gradient(&self, _input: &[f64; 1], _output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([-1.0])
    }
}

#[test]
fn model_failure_at_a_trial_point_propagates() {
    let result =
        minimize_unobserved(&Cliff, &CliffProblem, [0.0], &FixedStep(1.0), &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn model_failure_can_be_stopped_by_observer() {
    let observer = |event: &Event<'_, _, _, 1>| {
        matches!(event, Event::ModelFailed { .. }).then_some(Action::StopEarly)
    };

    let solution = minimize(
        &Cliff,
        &CliffProblem,
        [0.0],
        &FixedStep(1.0),
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    // Two steps succeeded (x = 1, 2) before the third trial failed.
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.x[0], 2.0);
}
