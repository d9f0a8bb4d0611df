use crate::OptimizationProblem;

/// An optimization problem with a caller-supplied gradient.
///
/// Gradient-based solvers need the objective's first-order derivative with
/// respect to the solver variables. This trait extends
/// [`OptimizationProblem`] with that capability: the gradient is computed
/// from model input/output, analytically or otherwise — no differentiation
/// is performed by the framework, and its correctness is the implementor's
/// responsibility.
///
/// The gradient has the same length `N` as the solver variables, so an
/// iterate and its gradient can never disagree about dimensionality.
pub trait GradientProblem<const N: usize>: OptimizationProblem<N> {
    /// Computes the gradient of the objective at the given input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`](OptimizationProblem::Error) if the gradient
    /// cannot be computed.
    fn gradient(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// f(x, y) = x² + y², ∇f = [2x, 2y].
    struct Paraboloid;

    impl OptimizationProblem<2> for Paraboloid {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
            Ok(*x)
        }

        fn objective(&self, input: &[f64; 2], _output: &f64) -> Result<f64, Self::Error> {
            Ok(input[0] * input[0] + input[1] * input[1])
        }
    }

    impl GradientProblem<2> for Paraboloid {
        fn gradient(&self, input: &[f64; 2], _output: &f64) -> Result<[f64; 2], Self::Error> {
            Ok([2.0 * input[0], 2.0 * input[1]])
        }
    }

    #[test]
    fn gradient_matches_objective_dimensions() {
        let problem = Paraboloid;
        let input = problem.input(&[3.0, -4.0]).unwrap();

        let gradient = problem.gradient(&input, &0.0).unwrap();

        assert_eq!(gradient, [6.0, -8.0]);
    }
}
