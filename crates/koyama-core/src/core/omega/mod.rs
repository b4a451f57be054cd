//! # Omega Models
//!
//! Intra-molecular correlation functions ω(k) as consumed by a PRISM-style solver. A model is
//! anything that turns a wavevector grid into a structure factor of the same length and can
//! name itself for diagnostics.

mod error;
mod koyama;
mod pairs;

pub use error::OmegaError;
pub use koyama::{DiscreteKoyama, SolvedParameters};
pub use pairs::PairCounting;

/// An intra-molecular correlation model.
pub trait Omega {
    /// Structure factor at every wavevector magnitude in `k`, in the same order.
    fn calculate(&self, k: &[f64]) -> Result<Vec<f64>, OmegaError>;

    /// Short identifier of the model variant.
    fn tag(&self) -> &'static str;
}
