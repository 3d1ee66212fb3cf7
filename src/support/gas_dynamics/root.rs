//! Bracketed scalar root solves for the implicit relations.
//!
//! The inverse area–Mach relation and the θ–β–M relation are both monotonic
//! on an interval known in advance, so each is posed as a one-variable
//! [`EquationProblem`] over a twine [`Model`] and handed to bisection.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;

use super::GasDynamicsError;

/// Bisection settings for the implicit relations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootConfig {
    /// Maximum iteration count for one bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the search variable (Mach number or radians).
    pub x_abs_tol: f64,

    /// Relative tolerance on the search variable.
    pub x_rel_tol: f64,

    /// Tolerance on the scaled residual.
    pub residual_tol: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_abs_tol: 0.0,
            x_rel_tol: 1e-13,
            residual_tol: 1e-13,
        }
    }
}

impl RootConfig {
    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.x_abs_tol,
            x_rel_tol: self.x_rel_tol,
            residual_tol: self.residual_tol,
        }
    }
}

/// A monotonic scalar function evaluated as a twine model.
struct Curve<F> {
    f: F,
}

impl<F: Fn(f64) -> f64> Model for Curve<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.f)(*input))
    }
}

/// Residual `(f(x) − target) / scale`.
struct Target {
    value: f64,
    scale: f64,
}

impl EquationProblem<1> for Target {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output - self.value) / self.scale])
    }
}

/// Finds `x` in `bracket` with `f(x) = target`.
///
/// The caller guarantees that `f(x) − target` changes sign over the bracket.
/// The residual is divided by `scale` so the tolerance can be relative.
pub(super) fn solve_bracketed(
    f: impl Fn(f64) -> f64,
    target: f64,
    scale: f64,
    bracket: [f64; 2],
    config: &RootConfig,
    what: &str,
) -> Result<f64, GasDynamicsError> {
    let model = Curve { f };
    let problem = Target {
        value: target,
        scale,
    };

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None::<bisection::Action>,
    )
    .map_err(|err| GasDynamicsError::Solver {
        context: format!("{what}: {err}"),
    })?;

    if solution.status != bisection::Status::Converged {
        return Err(GasDynamicsError::Solver {
            context: format!(
                "{what}: hit iteration limit: residual={}, iters={}",
                solution.residual, solution.iters
            ),
        });
    }

    log::trace!(
        "{what}: x={} after {} iterations (residual={:e})",
        solution.x,
        solution.iters,
        solution.residual
    );

    Ok(solution.x)
}
