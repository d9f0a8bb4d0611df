use descent_core::{Model, OptimizationProblem};

use crate::optimization::evaluate::evaluate;

use super::{
    Config, Error, Solution,
    bracket::{self, ExpandError},
    section::Section,
    solution::Status,
};

/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    objective: f64,
}

/// Core golden section search: bracket downhill, then shrink.
pub(super) fn search<M, P>(
    model: &M,
    problem: &P,
    guess: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let mut phi = |x: f64| evaluate(model, problem, [x]).map(|eval| eval.objective);

    let triple =
        bracket::expand(&mut phi, guess[0], guess[1], config).map_err(|error| match error {
            ExpandError::Eval(e) => e.into(),
            ExpandError::NonFinite { x } => Error::NonFinite { x },
            ExpandError::Budget { expansions } => Error::Bracket { expansions },
        })?;

    // The bracketing midpoint is the best point seen so far.
    let mut best = Point {
        x: triple.b,
        objective: triple.fb,
    };

    let mut section = Section::new(triple.a, triple.c);
    let mut left = Point {
        x: section.inner_left(),
        objective: phi(section.inner_left())?,
    };
    let mut right = Point {
        x: section.inner_right(),
        objective: phi(section.inner_right())?,
    };
    for point in [left, right] {
        if point.objective < best.objective {
            best = point;
        }
    }

    for iter in 1..=config.max_iters() {
        let x_ref = section.midpoint().abs();
        if section.gap() <= config.x_abs_tol() + config.x_rel_tol() * x_ref {
            return Ok(solution(Status::Converged, best, iter - 1));
        }

        if left.objective <= right.objective {
            // Left is better; drop the right part of the section.
            let x = section.shrink_right();
            right = left;
            left = Point {
                x,
                objective: phi(x)?,
            };
            if left.objective < best.objective {
                best = left;
            }
        } else {
            let x = section.shrink_left();
            left = right;
            right = Point {
                x,
                objective: phi(x)?,
            };
            if right.objective < best.objective {
                best = right;
            }
        }
    }

    Ok(solution(Status::MaxIters, best, config.max_iters()))
}

fn solution(status: Status, best: Point, iters: usize) -> Solution {
    Solution {
        status,
        x: best.x,
        objective: best.objective,
        iters,
    }
}
