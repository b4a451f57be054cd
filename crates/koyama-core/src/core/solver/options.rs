//! Numerical settings for the scalar root finder.

/// Configuration parameters for [`NewtonSolver`](super::NewtonSolver).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Convergence threshold on `|f(x)|`.
    ///
    /// The iteration stops successfully as soon as the residual falls to or below this value.
    pub tolerance: f64,
    /// The maximum number of Newton steps allowed.
    pub max_iterations: usize,
    /// How many times a rejected step may be halved before the iteration is abandoned.
    pub max_backtracks: usize,
    /// Relative step used for the central-difference derivative, scaled by `max(1, |x|)`.
    pub derivative_step: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-10,
            max_iterations: 100,
            max_backtracks: 40,
            derivative_step: 1.0e-7,
        }
    }
}
