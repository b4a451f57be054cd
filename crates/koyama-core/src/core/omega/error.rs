use thiserror::Error;

/// Failures raised while constructing or evaluating an omega model.
///
/// Every variant is fatal to the operation that raised it: construction produces no model and
/// `calculate` produces no partial structure factor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OmegaError {
    /// The requested persistence length is below the 4/3 floor of the Koyama model.
    ///
    /// Not recoverable by retrying; a different geometry must be supplied.
    #[error("DiscreteKoyama does not support persistence lengths < 4/3 (got lp = {lp})")]
    InvalidPersistenceLength { lp: f64 },

    /// A geometric input is non-finite, non-positive or otherwise unusable.
    #[error("Invalid chain geometry: {0}")]
    InvalidGeometry(String),

    /// The bending-energy root find did not converge from the initial guess.
    #[error(
        "DiscreteKoyama initialization failure. Could not solve for bending energy \
         (iterations: {iterations}, residual: {residual:.3e})"
    )]
    SolverNonConvergence {
        /// Newton iterations performed before giving up.
        iterations: usize,
        /// `|cos_avg(epsilon) - cos1|` at the last accepted iterate.
        residual: f64,
    },

    /// The fourth-moment expansion produced a negative (or non-finite) square-root argument.
    ///
    /// This is a user-correctable input error: the combination of geometry and bending energy
    /// yields a non-physical pair distribution for at least this separation.
    #[error(
        "Bad chain parameters: the pair distribution for separation n = {separation} is \
         non-physical (try reducing epsilon or revisiting sigma, l and lp)"
    )]
    InvalidChainParameters { separation: usize },
}
