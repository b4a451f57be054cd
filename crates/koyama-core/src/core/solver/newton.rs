use super::options::SolverOptions;
use super::{RootFinder, RootResult};
use tracing::{debug, trace};

/// Damped Newton iteration with a central-difference derivative.
///
/// A trial step is accepted only if the function is finite there and the residual decreases;
/// otherwise the step is halved, up to [`SolverOptions::max_backtracks`] times. Convergence is
/// declared only on the residual, so a stalled iteration is never reported as a root.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver {
    options: SolverOptions,
}

impl NewtonSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    fn derivative<F>(&self, f: &F, x: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let h = self.options.derivative_step * x.abs().max(1.0);
        (f(x + h) - f(x - h)) / (2.0 * h)
    }
}

impl RootFinder for NewtonSolver {
    fn solve<F>(&self, f: F, initial_guess: f64) -> RootResult
    where
        F: Fn(f64) -> f64,
    {
        let mut x = initial_guess;
        let mut fx = f(x);
        let mut iterations = 0;

        if !fx.is_finite() {
            debug!(x, "Root finder started at a non-finite function value.");
            return RootResult {
                value: x,
                converged: false,
                iterations,
                residual: fx.abs(),
            };
        }

        while fx.abs() > self.options.tolerance && iterations < self.options.max_iterations {
            iterations += 1;

            let slope = self.derivative(&f, x);
            if !slope.is_finite() || slope == 0.0 {
                debug!(x, slope, "Root finder hit a flat or non-finite derivative.");
                break;
            }

            let mut step = -fx / slope;
            let mut accepted = false;
            for _ in 0..=self.options.max_backtracks {
                let candidate = x + step;
                let f_candidate = f(candidate);
                if f_candidate.is_finite() && f_candidate.abs() < fx.abs() {
                    x = candidate;
                    fx = f_candidate;
                    accepted = true;
                    break;
                }
                step *= 0.5;
            }

            trace!(iteration = iterations, x, residual = fx.abs(), "Newton step.");

            if !accepted {
                debug!(x, "Root finder could not find a decreasing step.");
                break;
            }
        }

        let converged = fx.abs() <= self.options.tolerance;
        debug!(
            converged,
            iterations,
            value = x,
            residual = fx.abs(),
            "Root search finished."
        );

        RootResult {
            value: x,
            converged,
            iterations,
            residual: fx.abs(),
        }
    }
}
