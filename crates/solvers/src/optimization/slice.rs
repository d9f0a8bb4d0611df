use descent_core::OptimizationProblem;

use super::vector::add_scaled;

/// Adapter that restricts an `N`-variable problem to a ray.
///
/// The slice maps a step length `λ` to the point `origin + λ·direction`
/// and delegates input construction and the objective to the base problem,
/// turning any [`OptimizationProblem<N>`] into the one-variable problem a
/// line search needs.
pub struct RaySlice<'a, P, const N: usize> {
    problem: &'a P,
    origin: [f64; N],
    direction: [f64; N],
}

impl<'a, P, const N: usize> RaySlice<'a, P, N> {
    /// Creates a slice of `problem` along `direction` through `origin`.
    #[must_use]
    pub fn new(problem: &'a P, origin: [f64; N], direction: [f64; N]) -> Self {
        Self {
            problem,
            origin,
            direction,
        }
    }

    /// Returns the point on the ray at step length `lambda`.
    #[must_use]
    pub fn point_at(&self, lambda: f64) -> [f64; N] {
        add_scaled(&self.origin, lambda, &self.direction)
    }
}

impl<P, const N: usize> OptimizationProblem<1> for RaySlice<'_, P, N>
where
    P: OptimizationProblem<N>,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        self.problem.input(&self.point_at(x[0]))
    }

    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
        self.problem.objective(input, output)
    }
}
