//! Scalar root finding.
//!
//! The bending-energy solve only needs the capability "find `x` with `f(x) = 0` near `x0` and
//! say whether that worked". [`RootFinder`] captures exactly that, so the numerical method is an
//! implementation detail; [`NewtonSolver`] is the implementation shipped with the library.

mod newton;
mod options;

pub use newton::NewtonSolver;
pub use options::SolverOptions;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Last accepted iterate; the root when `converged` is true.
    pub value: f64,
    /// Whether the convergence criterion was met.
    pub converged: bool,
    /// Number of iterations performed.
    pub iterations: usize,
    /// `|f(value)|`.
    pub residual: f64,
}

/// A scalar root-finding capability.
pub trait RootFinder {
    /// Searches for a root of `f` starting from `initial_guess`.
    ///
    /// Implementations must never panic on non-finite function values; they report failure
    /// through [`RootResult::converged`] instead.
    fn solve<F>(&self, f: F, initial_guess: f64) -> RootResult
    where
        F: Fn(f64) -> f64;
}
